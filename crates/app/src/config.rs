//! Application configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `AURAMART_DATA_DIR` - Directory for persisted JSON records
//!   (default: `./auramart-data`)

use std::path::PathBuf;

use thiserror::Error;

/// Default data directory, relative to the working directory.
const DEFAULT_DATA_DIR: &str = "./auramart-data";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable is set but not valid Unicode.
    #[error("Invalid environment variable {0}: not valid unicode")]
    InvalidEnvVar(&'static str),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory the persistent store writes its JSON records into.
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] if `AURAMART_DATA_DIR` is
    /// set to a non-Unicode value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir = match std::env::var("AURAMART_DATA_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(std::env::VarError::NotPresent) => PathBuf::from(DEFAULT_DATA_DIR),
            Err(std::env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::InvalidEnvVar("AURAMART_DATA_DIR"));
            }
        };

        Ok(Self { data_dir })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}
