use thiserror::Error;

/// Errors raised by the two network-facing operations (search and recipe lookup)
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport or timeout failure talking to the recipe API
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The requested recipe id did not resolve
    #[error("Recipe not found: {0}")]
    NotFound(String),

    /// The recipe API answered with an unexpected status code.
    /// `message` is the `error` field of the JSON body, when there is one.
    #[error("Unexpected status {status} from {url}")]
    Status {
        status: u16,
        url: String,
        message: Option<String>,
    },

    /// The response body was not the JSON we expected
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured API base URL could not be turned into a request URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Top-level error for setting the application up and driving it
#[derive(Error, Debug)]
pub enum ForkifyError {
    /// Search or recipe fetch failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
