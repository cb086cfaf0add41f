mod request;

pub use request::RequestFetcher;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::FetchError;

/// Narrow network capability the sessions depend on: GET a URL, get JSON back.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError>;
}

