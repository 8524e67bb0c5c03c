//! Domain layer for capacity-override
//!
//! This crate contains the capacity value objects, the fixed table of host
//! interception bindings, and the settings-text scan that turns the
//! operator's setting into a [`ResolvedCapacity`]. It performs no I/O.
//!
//! # Core Concepts
//!
//! - **Resolved capacity**: the operator-configured number of non-privileged
//!   participants, defaulting to 10.
//! - **Effective capacity**: resolved capacity plus the reserved host slot.
//!   The only value ever written into host state.
//! - **Binding**: a host lifecycle moment paired with the state to overwrite.

pub mod binding;
pub mod capacity;
pub mod core;
pub mod settings;

// Re-export commonly used types
pub use binding::{
    HookTiming, HostMember, HostMoment, InterceptionBinding, TargetState, binding_for,
    standard_bindings,
};
pub use capacity::{DEFAULT_CAPACITY, EffectiveCapacity, RESERVED_SLOTS, ResolvedCapacity};
pub use crate::core::error::ResolveFailure;
pub use settings::{
    CAPACITY_SETTING_KEY, PLUGIN_ID, SETTINGS_FILE_EXTENSION, scan_capacity_setting,
    settings_file_name,
};
