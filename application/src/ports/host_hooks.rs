//! Host hook port
//!
//! Abstracts the external facility that redirects a host member's execution
//! into plugin code. An installer runs a callback immediately before or after
//! the bound member, handing it write access to one integer of host state:
//! an argument, the return value, or an instance field.

use std::sync::Arc;

use capacity_domain::{HostMember, InterceptionBinding, TargetState};
use thiserror::Error;

/// Mutable view onto the host integer a hook may overwrite.
#[derive(Debug)]
pub struct CapacitySlot<'a> {
    target: TargetState,
    value: &'a mut i32,
}

impl<'a> CapacitySlot<'a> {
    pub fn new(target: TargetState, value: &'a mut i32) -> Self {
        Self { target, value }
    }

    pub fn target(&self) -> TargetState {
        self.target
    }

    pub fn get(&self) -> i32 {
        *self.value
    }

    pub fn set(&mut self, value: i32) {
        *self.value = value;
    }
}

/// Callback run at a bound host moment.
///
/// Invoked synchronously on whichever thread the host calls the member on.
pub type HookCallback = Arc<dyn Fn(&mut CapacitySlot<'_>) + Send + Sync>;

/// Errors from installing a hook.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HookInstallError {
    /// The host does not expose the member.
    #[error("host member not found: {member}")]
    UnknownMember { member: HostMember },

    /// The hooking facility refused the hook.
    #[error("hook on {member} rejected: {reason}")]
    Rejected { member: HostMember, reason: String },
}

/// Port for installing hooks on host members.
pub trait HookInstaller {
    /// Install `callback` at the binding's member and timing.
    ///
    /// The callback receives a slot for the binding's target state.
    fn install(
        &mut self,
        binding: &InterceptionBinding,
        callback: HookCallback,
    ) -> Result<(), HookInstallError>;
}
