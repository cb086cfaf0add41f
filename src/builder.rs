use std::time::Duration;

use crate::config::AppConfig;
use crate::fetchers::RequestFetcher;
use crate::state::AppState;
use crate::ForkifyError;

/// Builder for an [`AppState`] talking to the recipe API over HTTP
#[derive(Debug, Default)]
pub struct ForkifyBuilder {
    config: Option<AppConfig>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    results_per_page: Option<usize>,
    default_servings: Option<u32>,
}

impl ForkifyBuilder {
    /// Start from an explicit configuration instead of the defaults
    ///
    /// Individual setters called on the builder still take precedence.
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the recipe API base URL
    ///
    /// # Example
    /// ```
    /// use forkify::Forkify;
    ///
    /// let builder = Forkify::builder()
    ///     .base_url("http://localhost:8080/api");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use forkify::Forkify;
    /// use std::time::Duration;
    ///
    /// let builder = Forkify::builder()
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    pub fn results_per_page(mut self, per_page: usize) -> Self {
        self.results_per_page = Some(per_page);
        self
    }

    pub fn default_servings(mut self, servings: u32) -> Self {
        self.default_servings = Some(servings);
        self
    }

    /// Validate the settings and create the application state
    ///
    /// # Errors
    /// Returns `ForkifyError` if:
    /// - results per page or default servings is zero
    /// - the base URL is empty
    /// - the HTTP client cannot be created
    pub fn build(self) -> Result<AppState<RequestFetcher>, ForkifyError> {
        let mut config = self.config.unwrap_or_default();

        if let Some(url) = self.base_url {
            config.api.base_url = url;
        }
        if let Some(timeout) = self.timeout {
            config.api.timeout = timeout.as_secs();
        }
        // Timeout from any source is at least one second
        config.api.timeout = config.api.timeout.max(1);
        if let Some(per_page) = self.results_per_page {
            config.search.results_per_page = per_page;
        }
        if let Some(servings) = self.default_servings {
            config.recipe.default_servings = servings;
        }

        if config.api.base_url.trim().is_empty() {
            return Err(ForkifyError::BuilderError(
                "API base URL cannot be empty".to_string(),
            ));
        }
        if config.search.results_per_page == 0 {
            return Err(ForkifyError::BuilderError(
                "Results per page must be at least 1".to_string(),
            ));
        }
        if config.recipe.default_servings == 0 {
            return Err(ForkifyError::BuilderError(
                "Default servings must be at least 1".to_string(),
            ));
        }

        let fetcher = RequestFetcher::new(Some(config.api.timeout()))?;
        Ok(AppState::new(fetcher, config))
    }
}

/// Main entry point for the builder API
pub struct Forkify;

impl Forkify {
    /// Creates a new builder
    ///
    /// # Example
    /// ```
    /// use forkify::Forkify;
    ///
    /// let builder = Forkify::builder();
    /// ```
    pub fn builder() -> ForkifyBuilder {
        ForkifyBuilder::default()
    }
}
