use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

use super::JsonFetcher;
use crate::error::FetchError;

/// [`JsonFetcher`] backed by a reqwest client
pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("forkify/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl JsonFetcher for RequestFetcher {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(url.to_string()));
        }

        let body = response.text().await?;
        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|value| value["error"].as_str().map(str::to_string));
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
                message,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn test_get_json() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/search?q=pizza")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"count": 0, "recipes": []}"#)
            .create();

        let fetcher = RequestFetcher::new(None).unwrap();
        let value = fetcher
            .get_json(&format!("{}/api/search?q=pizza", server.url()))
            .await
            .unwrap();

        assert_eq!(value["count"], 0);
        mock.assert();
    }

    #[tokio::test]
    async fn test_not_found_status() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/api/get")
            .match_query(mockito::Matcher::Any)
            .with_status(404)
            .create();

        let fetcher = RequestFetcher::new(None).unwrap();
        let result = fetcher
            .get_json(&format!("{}/api/get?rId=nope", server.url()))
            .await;

        assert!(matches!(result, Err(FetchError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_server_error_status() {
        let mut server = Server::new_async().await;
        let _m = server.mock("GET", "/broken").with_status(500).create();

        let fetcher = RequestFetcher::new(None).unwrap();
        let result = fetcher.get_json(&format!("{}/broken", server.url())).await;

        match result {
            Err(FetchError::Status {
                status, message, ..
            }) => {
                assert_eq!(status, 500);
                assert!(message.is_none());
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_error_message_kept() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/api/search")
            .match_query(mockito::Matcher::Any)
            .with_status(400)
            .with_body(r#"{"error": "Couldn't find recipe with that query"}"#)
            .create();

        let fetcher = RequestFetcher::new(None).unwrap();
        let result = fetcher
            .get_json(&format!("{}/api/search?q=zzzz", server.url()))
            .await;

        match result {
            Err(FetchError::Status {
                status: 400,
                message: Some(message),
                ..
            }) => assert!(message.contains("Couldn't find")),
            other => panic!("expected 400 with message, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/garbage")
            .with_status(200)
            .with_body("<html>not json</html>")
            .create();

        let fetcher = RequestFetcher::new(None).unwrap();
        let result = fetcher.get_json(&format!("{}/garbage", server.url())).await;

        assert!(matches!(result, Err(FetchError::Decode(_))));
    }
}
