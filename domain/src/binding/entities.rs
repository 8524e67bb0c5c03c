//! Binding entities

use std::fmt;

/// A host method, property accessor or lifecycle callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostMember {
    pub type_name: &'static str,
    pub member: &'static str,
}

impl HostMember {
    pub const fn new(type_name: &'static str, member: &'static str) -> Self {
        Self { type_name, member }
    }
}

impl fmt::Display for HostMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.type_name, self.member)
    }
}

/// When the override runs relative to the host member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookTiming {
    /// Before the member body, with write access to its arguments.
    Before,
    /// After the member returns, with write access to its result or to
    /// the instance it ran on.
    After,
}

impl HookTiming {
    pub fn as_str(&self) -> &'static str {
        match self {
            HookTiming::Before => "before",
            HookTiming::After => "after",
        }
    }
}

impl fmt::Display for HookTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host state a binding overwrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetState {
    /// Named argument of the intercepted call.
    Argument(&'static str),
    /// Value returned by the intercepted member.
    ReturnValue,
    /// Named field of the instance the member ran on.
    InstanceField(&'static str),
}

impl fmt::Display for TargetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetState::Argument(name) => write!(f, "argument `{name}`"),
            TargetState::ReturnValue => f.write_str("return value"),
            TargetState::InstanceField(name) => write!(f, "field `{name}`"),
        }
    }
}

/// Host lifecycle moments where capacity state is set or read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostMoment {
    /// The host is about to create a networking session.
    SessionStart,
    /// The player manager's maximum player count accessor was evaluated.
    PlayerCapacityQuery,
    /// Distance culling finished its early initialization.
    CullingInit,
    /// Distance culling was spawned on the network.
    CullingSpawn,
    /// Hit registration finished its early initialization.
    HitRegistrationInit,
    /// Hit registration was spawned on the network.
    HitRegistrationSpawn,
}

impl HostMoment {
    pub const ALL: [HostMoment; 6] = [
        HostMoment::SessionStart,
        HostMoment::PlayerCapacityQuery,
        HostMoment::CullingInit,
        HostMoment::CullingSpawn,
        HostMoment::HitRegistrationInit,
        HostMoment::HitRegistrationSpawn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HostMoment::SessionStart => "session_start",
            HostMoment::PlayerCapacityQuery => "player_capacity_query",
            HostMoment::CullingInit => "culling_init",
            HostMoment::CullingSpawn => "culling_spawn",
            HostMoment::HitRegistrationInit => "hit_registration_init",
            HostMoment::HitRegistrationSpawn => "hit_registration_spawn",
        }
    }
}

impl fmt::Display for HostMoment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Association between a host moment and the state the override writes.
///
/// Every binding writes the effective capacity, never the resolved one, so
/// all host subsystems agree on a ceiling that includes the reserved slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InterceptionBinding {
    pub moment: HostMoment,
    pub member: HostMember,
    pub timing: HookTiming,
    pub target: TargetState,
}

impl fmt::Display for InterceptionBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} {}, {})",
            self.moment, self.timing, self.member, self.target
        )
    }
}
