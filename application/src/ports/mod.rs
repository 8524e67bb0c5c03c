//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod capacity_source;
pub mod host_hooks;
pub mod settings_source;
