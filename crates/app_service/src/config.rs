//! Service configuration

use serde::Deserialize;

/// Service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Log level
    pub log_level: String,
    /// Business name shown on bill headings
    pub business_name: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            business_name: "Aqua Supply".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Loads configuration from environment variables with the `AQUA_` prefix
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("AQUA"))
            .build()?
            .try_deserialize()
    }
}
