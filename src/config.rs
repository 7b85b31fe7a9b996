//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    // === Database Configuration ===
    /// MongoDB connection string.
    #[serde(default)]
    pub database_url: Option<String>,

    /// Database holding the `job` collection.
    #[serde(default)]
    pub database_name: Option<String>,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Emit logs as JSON lines.
    #[serde(default)]
    pub log_json: bool,
}

/// Connection settings for the document store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    /// Connection string.
    pub url: String,
    /// Database name.
    pub database: String,
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            database_url: None,
            database_name: None,
            rust_log: default_log_level(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Whether `DATABASE_URL` is set to a non-empty value.
    pub fn has_database_url(&self) -> bool {
        non_empty(&self.database_url).is_some()
    }

    /// Whether `DATABASE_NAME` is set to a non-empty value.
    pub fn has_database_name(&self) -> bool {
        non_empty(&self.database_name).is_some()
    }

    /// Store settings, present only when both URL and name are set.
    pub fn store_settings(&self) -> Option<StoreSettings> {
        let url = non_empty(&self.database_url)?;
        let database = non_empty(&self.database_name)?;
        Some(StoreSettings {
            url: url.to_string(),
            database: database.to_string(),
        })
    }
}
