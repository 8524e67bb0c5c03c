//! Session capacity override plugin
//!
//! Lets a multiplayer host run with a participant count other than its
//! built-in default. The host caches its capacity ceiling in several
//! subsystems that initialize in racing order, some before the host's own
//! settings subsystem is ready. This plugin reads the operator's setting
//! directly from the settings file at every bound lifecycle moment and
//! forces the same effective capacity into each of them.
//!
//! # Usage
//!
//! ```ignore
//! use capacity_override::CapacityOverridePlugin;
//!
//! // `installer` is the host's hooking facility.
//! let plugin = CapacityOverridePlugin::load_from_environment(None, &mut installer)?;
//! assert!(plugin.report().is_complete());
//! ```

mod logging;
mod plugin;

pub use logging::{LoggingGuard, init_logging};
pub use plugin::CapacityOverridePlugin;

// Re-export the layers for host-side shims
pub use capacity_application as application;
pub use capacity_domain as domain;
pub use capacity_infrastructure as infrastructure;
