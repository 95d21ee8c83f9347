use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main catalog configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Search and pagination settings
    #[serde(default)]
    pub search: SearchConfig,
    /// Path of the JSON catalog file used by the CLI
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,
}

/// Pagination settings applied to every search
#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Page size used when a query does not specify one
    #[serde(default = "default_limit")]
    pub default_limit: u32,
    /// Optional upper bound for a requested page size; unset means no cap
    #[serde(default)]
    pub max_limit: Option<u32>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: None,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            catalog_path: default_catalog_path(),
        }
    }
}

// Default value functions
fn default_limit() -> u32 {
    15
}

fn default_catalog_path() -> String {
    "recipes.json".to_string()
}

impl CatalogConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPES__ prefix
    /// 2. recipe_catalog.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPES__SEARCH__DEFAULT_LIMIT
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`CatalogConfig::load`] for the precedence rules.
pub fn load_config() -> Result<CatalogConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe_catalog").required(false))
        // Use double underscore for nested: RECIPES__SEARCH__MAX_LIMIT
        .add_source(
            Environment::with_prefix("RECIPES")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
