use crate::error::FinderError;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Recipe API settings
    #[serde(default)]
    pub api: ApiConfig,
}

/// Configuration for the Spoonacular API
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Spoonacular API key (can also be set via environment variable)
    pub spoonacular_key: Option<String>,
    /// Base URL for API endpoint (for proxies or tests)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            spoonacular_key: None,
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://api.spoonacular.com".to_string()
}

pub(crate) fn default_timeout() -> u64 {
    30
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_FINDER__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_FINDER__API__SPOONACULAR_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// The configured API key, rejecting missing or blank values
    pub fn api_key(&self) -> Result<&str, FinderError> {
        self.api
            .spoonacular_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(FinderError::MissingApiKey)
    }
}

/// Load configuration from file and environment variables
///
/// See [`AppConfig::load`] for the source priority.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        .add_source(environment())
        .build()?;

    settings.try_deserialize()
}

/// Environment variables with RECIPE_FINDER prefix
///
/// Use double underscore for nested: RECIPE_FINDER__API__SPOONACULAR_KEY
fn environment() -> Environment {
    Environment::with_prefix("RECIPE_FINDER")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
