//! Infrastructure layer for capacity-override
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the settings file source and the in-process hook
//! table, plus loading of the plugin's bootstrap configuration.

pub mod config;
pub mod hooks;
pub mod settings;

// Re-export commonly used types
pub use config::{
    ConfigLoadError, ConfigLoader, ConfigValidationError, FileConfig, FileLogConfig,
    FileSettingsConfig,
};
pub use hooks::HookTable;
pub use settings::FileSettingsSource;
