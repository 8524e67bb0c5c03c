//! Identifiers tying this plugin to its settings file.

/// Identifier the plugin loader registers this plugin under. The settings
/// file is named after it.
pub const PLUGIN_ID: &str = "capacity.override";

/// Key holding the desired non-privileged participant count.
pub const CAPACITY_SETTING_KEY: &str = "MaxPlayers";

/// Extension the host uses for per-plugin settings files.
pub const SETTINGS_FILE_EXTENSION: &str = "cfg";

/// File name of the settings file for a plugin identifier.
pub fn settings_file_name(plugin_id: &str) -> String {
    format!("{plugin_id}.{SETTINGS_FILE_EXTENSION}")
}
