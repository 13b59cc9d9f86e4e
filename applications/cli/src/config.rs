/// Application configuration
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "warden.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WardenConfig {
    #[serde(default = "default_storage")]
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl WardenConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; the default `warden.toml` is optional.
    /// Environment variables prefixed with `WARDEN_` override file values,
    /// with `__` between nested keys (`WARDEN_STORAGE__DATABASE_URL`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("WARDEN")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.storage.database_url.trim().is_empty() {
            return Err(AppError::Config(
                "database URL is required (set WARDEN_STORAGE__DATABASE_URL)".to_string(),
            ));
        }

        if self.storage.max_connections == 0 {
            return Err(AppError::Config(
                "storage.max_connections must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
        max_connections: default_max_connections(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data/warden.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Default for WardenConfig {
    fn default() -> Self {
        Self {
            storage: default_storage(),
        }
    }
}
