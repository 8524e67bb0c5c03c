//! Capacity resolution failures

use thiserror::Error;

/// Reasons the settings file could not supply a capacity.
///
/// None of these are fatal. Each one resolves to
/// [`DEFAULT_CAPACITY`](crate::DEFAULT_CAPACITY) plus a logged warning.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveFailure {
    #[error("settings file not found: {path}")]
    ConfigMissing { path: String },

    #[error("key '{key}' not found in settings file")]
    KeyMissing { key: String },

    #[error("could not parse capacity from '{raw}'")]
    ParseFailure { raw: String },

    #[error("failed to read settings file: {message}")]
    IoFailure { message: String },
}

impl ResolveFailure {
    /// Short stable label, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            ResolveFailure::ConfigMissing { .. } => "config_missing",
            ResolveFailure::KeyMissing { .. } => "key_missing",
            ResolveFailure::ParseFailure { .. } => "parse_failure",
            ResolveFailure::IoFailure { .. } => "io_failure",
        }
    }
}
