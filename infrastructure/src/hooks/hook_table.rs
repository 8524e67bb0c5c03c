//! Hook table
//!
//! The [`HookTable`] implements [`HookInstaller`] for hosts whose native
//! detour shims call back into Rust. Each shim forwards its moment with
//! [`HookTable::fire`], handing over the host integer to overwrite.
//!
//! Hooks are installed once during plugin load through `&mut self`. After
//! that the table is only read, so it can be shared across host threads
//! behind an `Arc` without locking.

use std::collections::{HashMap, HashSet};
use std::fmt;

use capacity_application::ports::host_hooks::{
    CapacitySlot, HookCallback, HookInstallError, HookInstaller,
};
use capacity_domain::{HookTiming, HostMember, InterceptionBinding, TargetState};

struct InstalledHook {
    target: TargetState,
    callback: HookCallback,
}

/// Callbacks keyed by host member and timing.
#[derive(Default)]
pub struct HookTable {
    hooks: HashMap<(HostMember, HookTiming), Vec<InstalledHook>>,
    /// Members the host exposes; `None` accepts any member.
    known: Option<HashSet<HostMember>>,
}

impl HookTable {
    /// Create a table that accepts hooks on any member.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table that only accepts hooks on `members`.
    pub fn with_known_members(members: impl IntoIterator<Item = HostMember>) -> Self {
        Self {
            hooks: HashMap::new(),
            known: Some(members.into_iter().collect()),
        }
    }

    /// Number of installed hooks.
    pub fn len(&self) -> usize {
        self.hooks.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_hooked(&self, member: HostMember, timing: HookTiming) -> bool {
        self.hooks.contains_key(&(member, timing))
    }

    /// Run the hooks installed for `member` at `timing` that write `target`.
    ///
    /// Hooks run in installation order on the calling thread. Returns how
    /// many ran.
    pub fn fire(
        &self,
        member: HostMember,
        timing: HookTiming,
        target: TargetState,
        value: &mut i32,
    ) -> usize {
        let Some(hooks) = self.hooks.get(&(member, timing)) else {
            return 0;
        };

        let mut fired = 0;
        for hook in hooks.iter().filter(|h| h.target == target) {
            let mut slot = CapacitySlot::new(hook.target, value);
            (hook.callback)(&mut slot);
            fired += 1;
        }
        fired
    }
}

impl HookInstaller for HookTable {
    fn install(
        &mut self,
        binding: &InterceptionBinding,
        callback: HookCallback,
    ) -> Result<(), HookInstallError> {
        if let Some(known) = &self.known
            && !known.contains(&binding.member)
        {
            return Err(HookInstallError::UnknownMember {
                member: binding.member,
            });
        }

        self.hooks
            .entry((binding.member, binding.timing))
            .or_default()
            .push(InstalledHook {
                target: binding.target,
                callback,
            });
        Ok(())
    }
}

impl fmt::Debug for HookTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookTable")
            .field("hooks", &self.len())
            .field("restricted", &self.known.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capacity_domain::{HostMoment, binding_for};
    use std::sync::Arc;

    fn set_to(value: i32) -> HookCallback {
        Arc::new(move |slot: &mut CapacitySlot<'_>| slot.set(value))
    }

    #[test]
    fn test_install_and_fire() {
        let binding = binding_for(HostMoment::PlayerCapacityQuery);
        let mut table = HookTable::new();
        table.install(binding, set_to(25)).unwrap();

        let mut result = 4;
        let fired = table.fire(binding.member, binding.timing, binding.target, &mut result);

        assert_eq!(fired, 1);
        assert_eq!(result, 25);
        assert_eq!(table.len(), 1);
        assert!(table.is_hooked(binding.member, binding.timing));
    }

    #[test]
    fn test_fire_unhooked_member_is_noop() {
        let binding = binding_for(HostMoment::CullingInit);
        let table = HookTable::new();

        let mut field = 4;
        assert_eq!(table.fire(binding.member, binding.timing, binding.target, &mut field), 0);
        assert_eq!(field, 4);
        assert!(table.is_empty());
    }

    #[test]
    fn test_fire_respects_timing_and_target() {
        let binding = binding_for(HostMoment::SessionStart);
        let mut table = HookTable::new();
        table.install(binding, set_to(11)).unwrap();

        let mut value = 4;
        assert_eq!(table.fire(binding.member, HookTiming::After, binding.target, &mut value), 0);
        assert_eq!(
            table.fire(binding.member, binding.timing, TargetState::ReturnValue, &mut value),
            0
        );
        assert_eq!(value, 4);
    }

    #[test]
    fn test_hooks_run_in_installation_order() {
        let binding = binding_for(HostMoment::HitRegistrationSpawn);
        let mut table = HookTable::new();
        table.install(binding, set_to(5)).unwrap();
        table.install(binding, set_to(9)).unwrap();

        let mut field = 0;
        assert_eq!(table.fire(binding.member, binding.timing, binding.target, &mut field), 2);
        assert_eq!(field, 9);
    }

    #[test]
    fn test_unknown_member_rejected() {
        let known = binding_for(HostMoment::SessionStart).member;
        let mut table = HookTable::with_known_members([known]);

        let binding = binding_for(HostMoment::CullingSpawn);
        let err = table.install(binding, set_to(1)).unwrap_err();

        assert_eq!(
            err,
            HookInstallError::UnknownMember {
                member: binding.member
            }
        );
        assert!(table.is_empty());
        assert!(table.install(binding_for(HostMoment::SessionStart), set_to(1)).is_ok());
    }
}
