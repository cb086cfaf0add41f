use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Main application configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Recipe API connection settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Search result presentation
    #[serde(default)]
    pub search: SearchConfig,
    /// Recipe detail defaults
    #[serde(default)]
    pub recipe: RecipeConfig,
}

/// Where the recipe API lives and how long we wait for it
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL; `/search` and `/get` are appended to it
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Base URL without a trailing slash
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Number of results shown per page
    #[serde(default = "default_results_per_page")]
    pub results_per_page: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            results_per_page: default_results_per_page(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RecipeConfig {
    /// Servings assumed for a freshly opened recipe (the API does not report one)
    #[serde(default = "default_servings")]
    pub default_servings: u32,
}

impl Default for RecipeConfig {
    fn default() -> Self {
        Self {
            default_servings: default_servings(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://forkify-api.herokuapp.com/api".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_results_per_page() -> usize {
    10
}

fn default_servings() -> u32 {
    4
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with FORKIFY__ prefix
    /// 2. forkify.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: FORKIFY__API__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`AppConfig::load`] for the precedence rules.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("forkify").required(false))
        // Use double underscore for nested: FORKIFY__SEARCH__RESULTS_PER_PAGE
        .add_source(
            Environment::with_prefix("FORKIFY")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
