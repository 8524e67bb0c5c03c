//! Host settings location (`[settings]` section)

use capacity_domain::PLUGIN_ID;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the host keeps the plugin settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSettingsConfig {
    /// Host config directory holding `<plugin_id>.cfg`
    pub config_dir: PathBuf,
    /// Identifier the settings file is named after
    pub plugin_id: String,
}

impl Default for FileSettingsConfig {
    fn default() -> Self {
        Self {
            config_dir: PathBuf::from("BepInEx").join("config"),
            plugin_id: PLUGIN_ID.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_deserialize() {
        let toml_str = r#"
[settings]
config_dir = "/srv/game/BepInEx/config"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.settings.config_dir,
            PathBuf::from("/srv/game/BepInEx/config")
        );
        assert_eq!(config.settings.plugin_id, "capacity.override");
    }
}
