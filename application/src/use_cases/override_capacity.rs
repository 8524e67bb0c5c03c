//! Override capacity use case
//!
//! The [`OverrideCoordinator`] owns the single write path into host state.
//! At every bound moment it resolves the capacity afresh, derives the
//! effective capacity and overwrites the bound argument, return value or
//! field.
//!
//! Bindings are not ordered relative to each other. Any binding may fire
//! any number of times, in any order; each firing reassigns the same
//! value for unchanged settings, so the host always observes the latest
//! effective capacity.
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use capacity_application::{CapacityResolver, OverrideCoordinator};
//!
//! let coordinator = OverrideCoordinator::new(Arc::new(CapacityResolver::new(source)));
//! let report = coordinator.register(&mut installer);
//! assert!(report.is_complete());
//! ```

use std::sync::Arc;

use crate::ports::capacity_source::CapacitySource;
use crate::ports::host_hooks::{CapacitySlot, HookCallback, HookInstallError, HookInstaller};
use capacity_domain::{EffectiveCapacity, HostMoment, InterceptionBinding, standard_bindings};
use tracing::{info, warn};

/// Host value before and after a binding fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityTransition {
    pub before: i32,
    pub after: EffectiveCapacity,
}

impl CapacityTransition {
    pub fn changed(&self) -> bool {
        self.before != self.after.value()
    }
}

/// Result of registering a set of bindings.
#[derive(Debug, Default)]
pub struct RegistrationReport {
    pub installed: Vec<HostMoment>,
    pub failed: Vec<(HostMoment, HookInstallError)>,
}

impl RegistrationReport {
    /// Whether every binding was installed.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Applies the effective capacity at every bound host moment.
///
/// Cheap to clone. Each installed callback holds its own clone.
#[derive(Clone)]
pub struct OverrideCoordinator {
    source: Arc<dyn CapacitySource>,
}

impl OverrideCoordinator {
    pub fn new(source: Arc<dyn CapacitySource>) -> Self {
        Self { source }
    }

    /// Resolve the current setting and add the reserved slots.
    pub fn effective_capacity(&self) -> EffectiveCapacity {
        self.source.resolve().effective()
    }

    /// Overwrite the host value behind `slot` with the effective capacity.
    pub fn apply(
        &self,
        binding: &InterceptionBinding,
        slot: &mut CapacitySlot<'_>,
    ) -> CapacityTransition {
        let before = slot.get();
        let after = self.effective_capacity();
        slot.set(after.value());

        info!(
            binding = binding.moment.as_str(),
            member = %binding.member,
            target = %slot.target(),
            before,
            after = after.value(),
            "Capacity override applied: {} -> {}",
            before,
            after
        );

        CapacityTransition { before, after }
    }

    /// Install every standard binding through `installer`.
    pub fn register(&self, installer: &mut dyn HookInstaller) -> RegistrationReport {
        self.register_bindings(installer, standard_bindings())
    }

    /// Install the given bindings, continuing past individual failures.
    pub fn register_bindings(
        &self,
        installer: &mut dyn HookInstaller,
        bindings: &[InterceptionBinding],
    ) -> RegistrationReport {
        let mut report = RegistrationReport::default();

        for binding in bindings {
            match installer.install(binding, self.callback_for(*binding)) {
                Ok(()) => {
                    info!(
                        binding = binding.moment.as_str(),
                        member = %binding.member,
                        timing = binding.timing.as_str(),
                        "Registered capacity binding"
                    );
                    report.installed.push(binding.moment);
                }
                Err(e) => {
                    warn!(
                        binding = binding.moment.as_str(),
                        member = %binding.member,
                        error = %e,
                        "Failed to register capacity binding"
                    );
                    report.failed.push((binding.moment, e));
                }
            }
        }

        report
    }

    fn callback_for(&self, binding: InterceptionBinding) -> HookCallback {
        let coordinator = self.clone();
        Arc::new(move |slot: &mut CapacitySlot<'_>| {
            coordinator.apply(&binding, slot);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capacity_domain::{HostMember, ResolvedCapacity, TargetState, binding_for};
    use std::sync::atomic::{AtomicI32, Ordering};

    /// Capacity source whose value tests can change.
    struct Adjustable(AtomicI32);

    impl Adjustable {
        fn new(value: i32) -> Arc<Self> {
            Arc::new(Self(AtomicI32::new(value)))
        }

        fn set(&self, value: i32) {
            self.0.store(value, Ordering::SeqCst);
        }
    }

    impl CapacitySource for Adjustable {
        fn resolve(&self) -> ResolvedCapacity {
            ResolvedCapacity::new(self.0.load(Ordering::SeqCst))
        }
    }

    /// Installer that records callbacks and can refuse chosen members.
    #[derive(Default)]
    struct RecordingInstaller {
        installed: Vec<(InterceptionBinding, HookCallback)>,
        refuse: Vec<HostMember>,
    }

    impl HookInstaller for RecordingInstaller {
        fn install(
            &mut self,
            binding: &InterceptionBinding,
            callback: HookCallback,
        ) -> Result<(), HookInstallError> {
            if self.refuse.contains(&binding.member) {
                return Err(HookInstallError::Rejected {
                    member: binding.member,
                    reason: "refused by test".to_string(),
                });
            }
            self.installed.push((*binding, callback));
            Ok(())
        }
    }

    impl RecordingInstaller {
        fn fire(&self, moment: HostMoment, value: &mut i32) {
            let (binding, callback) = self
                .installed
                .iter()
                .find(|(b, _)| b.moment == moment)
                .expect("binding installed");
            let mut slot = CapacitySlot::new(binding.target, value);
            callback(&mut slot);
        }
    }

    #[test]
    fn test_effective_capacity_adds_reserved_slot() {
        let coordinator = OverrideCoordinator::new(Adjustable::new(24));
        assert_eq!(coordinator.effective_capacity().value(), 25);
    }

    #[test]
    fn test_apply_overwrites_and_reports_transition() {
        let coordinator = OverrideCoordinator::new(Adjustable::new(24));
        let binding = binding_for(HostMoment::PlayerCapacityQuery);

        let mut host_value = 4;
        let mut slot = CapacitySlot::new(binding.target, &mut host_value);
        let transition = coordinator.apply(binding, &mut slot);

        assert_eq!(transition.before, 4);
        assert_eq!(transition.after.value(), 25);
        assert!(transition.changed());
        assert_eq!(host_value, 25);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let coordinator = OverrideCoordinator::new(Adjustable::new(7));
        let binding = binding_for(HostMoment::CullingInit);
        let mut field = 4;

        let first = coordinator.apply(binding, &mut CapacitySlot::new(binding.target, &mut field));
        let second = coordinator.apply(binding, &mut CapacitySlot::new(binding.target, &mut field));

        assert_eq!(first.after, second.after);
        assert!(!second.changed());
        assert_eq!(field, 8);
    }

    #[test]
    fn test_apply_does_not_clamp() {
        let source = Adjustable::new(0);
        let coordinator = OverrideCoordinator::new(source.clone());
        let binding = binding_for(HostMoment::SessionStart);
        let mut argument = 4;

        coordinator.apply(binding, &mut CapacitySlot::new(binding.target, &mut argument));
        assert_eq!(argument, 1);

        source.set(-3);
        coordinator.apply(binding, &mut CapacitySlot::new(binding.target, &mut argument));
        assert_eq!(argument, -2);
    }

    #[test]
    fn test_register_installs_every_binding() {
        let coordinator = OverrideCoordinator::new(Adjustable::new(10));
        let mut installer = RecordingInstaller::default();

        let report = coordinator.register(&mut installer);

        assert!(report.is_complete());
        assert_eq!(report.installed, HostMoment::ALL.to_vec());
        assert_eq!(installer.installed.len(), HostMoment::ALL.len());
    }

    #[test]
    fn test_register_continues_past_failures() {
        let coordinator = OverrideCoordinator::new(Adjustable::new(10));
        let mut installer = RecordingInstaller {
            refuse: vec![binding_for(HostMoment::CullingSpawn).member],
            ..Default::default()
        };

        let report = coordinator.register(&mut installer);

        assert!(!report.is_complete());
        assert_eq!(report.installed.len(), HostMoment::ALL.len() - 1);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, HostMoment::CullingSpawn);
    }

    #[test]
    fn test_installed_callbacks_resolve_on_each_firing() {
        let source = Adjustable::new(24);
        let coordinator = OverrideCoordinator::new(source.clone());
        let mut installer = RecordingInstaller::default();
        coordinator.register(&mut installer);

        let mut max_players = 4;
        installer.fire(HostMoment::PlayerCapacityQuery, &mut max_players);
        assert_eq!(max_players, 25);

        source.set(30);
        installer.fire(HostMoment::PlayerCapacityQuery, &mut max_players);
        assert_eq!(max_players, 31);
    }

    #[test]
    fn test_init_and_spawn_order_independent() {
        let coordinator = OverrideCoordinator::new(Adjustable::new(15));
        let mut installer = RecordingInstaller::default();
        coordinator.register(&mut installer);

        let mut spawn_first = 4;
        installer.fire(HostMoment::HitRegistrationSpawn, &mut spawn_first);
        installer.fire(HostMoment::HitRegistrationInit, &mut spawn_first);

        let mut init_first = 4;
        installer.fire(HostMoment::HitRegistrationInit, &mut init_first);
        installer.fire(HostMoment::HitRegistrationSpawn, &mut init_first);

        assert_eq!(spawn_first, 16);
        assert_eq!(init_first, 16);
    }

    #[test]
    fn test_registered_targets_follow_binding_table() {
        let coordinator = OverrideCoordinator::new(Adjustable::new(2));
        let mut installer = RecordingInstaller::default();
        coordinator.register(&mut installer);

        let targets: Vec<_> = installer.installed.iter().map(|(b, _)| b.target).collect();
        assert_eq!(targets[0], TargetState::Argument("maxPlayers"));
        assert_eq!(targets[1], TargetState::ReturnValue);
        assert!(
            targets[2..]
                .iter()
                .all(|t| *t == TargetState::InstanceField("playerMaxCount"))
        );
    }
}
