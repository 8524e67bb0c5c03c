//! Logging configuration from TOML (`[log]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// `EnvFilter` directive, e.g. `"info"` or `"capacity_application=debug"`
    pub filter: String,
    /// Directory for a log file; console only when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
    /// Log file name inside `directory`
    pub file_name: String,
}

impl Default for FileLogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            directory: None,
            file_name: "capacity-override.log".to_string(),
        }
    }
}
