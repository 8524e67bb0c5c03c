//! Configuration file loader with multi-source merging

use super::file_config::{ConfigValidationError, FileConfig};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Prefix for environment overrides, e.g. `CAPACITY_OVERRIDE_LOG__FILTER`.
pub const ENV_PREFIX: &str = "CAPACITY_OVERRIDE_";

const PROJECT_CONFIG_FILE: &str = "capacity-override.toml";

/// Errors from loading the bootstrap configuration
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to load configuration: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] ConfigValidationError),
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables prefixed with `CAPACITY_OVERRIDE_`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./capacity-override.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/capacity-override/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, ConfigLoadError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: FileConfig = figment.extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/capacity-override/config.toml if set,
    /// otherwise the platform config directory equivalent.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("capacity-override").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        let path = PathBuf::from(PROJECT_CONFIG_FILE);
        path.exists().then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.settings.plugin_id, "capacity.override");
        assert!(config.log.directory.is_none());
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("capacity-override"));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bootstrap.toml");
        let mut expected = FileConfig::default();
        expected.settings.config_dir = dir.path().join("config");
        expected.log.filter = "debug".to_string();
        std::fs::write(&path, toml::to_string(&expected).unwrap()).unwrap();

        let config = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(config.settings.config_dir, expected.settings.config_dir);
        assert_eq!(config.log.filter, "debug");
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bootstrap.toml");
        std::fs::write(&path, "[settings]\nplugin_id = \"\"\n").unwrap();

        let err = ConfigLoader::load(Some(&path)).unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::Invalid(ConfigValidationError::EmptyPluginId)
        ));
    }

    #[test]
    fn test_load_reports_malformed_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bootstrap.toml");
        std::fs::write(&path, "[settings\nplugin_id = ").unwrap();

        let err = ConfigLoader::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Figment(_)));
    }
}
