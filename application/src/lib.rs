//! Application layer for capacity-override
//!
//! This crate contains the port definitions and the two use cases: the
//! capacity resolver and the override coordinator. It depends only on the
//! domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    capacity_source::CapacitySource,
    host_hooks::{CapacitySlot, HookCallback, HookInstallError, HookInstaller},
    settings_source::{SettingsReadError, SettingsSource},
};
pub use use_cases::override_capacity::{CapacityTransition, OverrideCoordinator, RegistrationReport};
pub use use_cases::resolve_capacity::{CapacityResolution, CapacityResolver};
