//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the bootstrap config file.
//! The capacity setting itself is not here: it lives in the host's settings
//! file and is only ever read by the resolver's own scan.

mod log;
mod settings;

pub use log::FileLogConfig;
pub use settings::FileSettingsConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("settings.plugin_id cannot be empty")]
    EmptyPluginId,

    #[error("log.file_name cannot be empty when log.directory is set")]
    EmptyLogFileName,
}

/// Complete bootstrap configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Host settings location
    pub settings: FileSettingsConfig,
    /// Logging settings
    pub log: FileLogConfig,
}

impl FileConfig {
    /// Validate the configuration, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.settings.plugin_id.trim().is_empty() {
            return Err(ConfigValidationError::EmptyPluginId);
        }
        if self.log.directory.is_some() && self.log.file_name.trim().is_empty() {
            return Err(ConfigValidationError::EmptyLogFileName);
        }
        Ok(())
    }
}
