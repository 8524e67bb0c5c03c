//! Reads the plugin settings file straight from disk.
//!
//! Never goes through the host's settings subsystem, which may not have
//! loaded when the first hook fires.

use capacity_application::ports::settings_source::{SettingsReadError, SettingsSource};
use capacity_domain::settings_file_name;
use std::io;
use std::path::{Path, PathBuf};

/// Settings source backed by `<config dir>/<plugin id>.cfg`.
#[derive(Debug, Clone)]
pub struct FileSettingsSource {
    path: PathBuf,
}

impl FileSettingsSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Locate the settings file the host keeps for `plugin_id`.
    pub fn for_plugin(config_dir: impl AsRef<Path>, plugin_id: &str) -> Self {
        Self::new(config_dir.as_ref().join(settings_file_name(plugin_id)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsSource for FileSettingsSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn read_settings(&self) -> Result<String, SettingsReadError> {
        match std::fs::read(&self.path) {
            // Stray non-UTF-8 bytes in comments must not hide the setting.
            Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(SettingsReadError::NotFound {
                path: self.location(),
            }),
            Err(e) => Err(SettingsReadError::Io {
                path: self.location(),
                source: e,
            }),
        }
    }
}
