//! Settings file adapter

mod file_source;

pub use file_source::FileSettingsSource;
