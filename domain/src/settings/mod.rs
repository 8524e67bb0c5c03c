//! Settings file conventions and the capacity line scanner
//!
//! The host persists plugin settings as plain `key = value` text. Only one
//! key matters here, and it is read with a minimal scan so the lookup works
//! before the host's own settings subsystem has loaded anything.

mod scan;
mod setting_key;

pub use scan::scan_capacity_setting;
pub use setting_key::{CAPACITY_SETTING_KEY, PLUGIN_ID, SETTINGS_FILE_EXTENSION, settings_file_name};
