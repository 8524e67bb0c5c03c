//! Bootstrap configuration loading for capacity-override
//!
//! This module handles file I/O and merging of the plugin's own
//! configuration from multiple sources. The priority order (highest to
//! lowest):
//!
//! 1. `CAPACITY_OVERRIDE_*` environment variables
//! 2. Explicitly passed config file
//! 3. Project root: `./capacity-override.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/capacity-override/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigValidationError, FileConfig, FileLogConfig, FileSettingsConfig};
pub use loader::{ConfigLoadError, ConfigLoader, ENV_PREFIX};
