//! Settings source port
//!
//! Defines how the resolver obtains the raw text of the plugin settings
//! file. The adapter must not depend on the host's own settings subsystem,
//! which may not have loaded yet when the first hook fires.

use std::io;
use thiserror::Error;

/// Errors from reading the settings text.
#[derive(Error, Debug)]
pub enum SettingsReadError {
    /// Nothing has been persisted yet.
    #[error("settings file not found: {path}")]
    NotFound { path: String },

    /// The file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Port for reading the persisted plugin settings.
pub trait SettingsSource: Send + Sync {
    /// Human-readable location of the settings, used in log lines.
    fn location(&self) -> String;

    /// Read the full settings text. Called afresh on every resolution.
    fn read_settings(&self) -> Result<String, SettingsReadError>;
}
