//! The fixed binding table

use super::entities::{HookTiming, HostMember, HostMoment, InterceptionBinding, TargetState};

const SESSION: &str = "NetworkSession";
const PLAYER_MANAGER: &str = "PlayerManager";
const CULLING: &str = "DistanceCulling";
const HIT_REGISTRATION: &str = "HitRegistration";

/// Field both culling and hit registration cache their ceiling in.
const PLAYER_MAX_COUNT_FIELD: &str = "playerMaxCount";

static STANDARD_BINDINGS: [InterceptionBinding; 6] = [
    // Read once and used immediately to size the session, so it has to be
    // rewritten before the call body runs.
    InterceptionBinding {
        moment: HostMoment::SessionStart,
        member: HostMember::new(SESSION, "CreateSession"),
        timing: HookTiming::Before,
        target: TargetState::Argument("maxPlayers"),
    },
    InterceptionBinding {
        moment: HostMoment::PlayerCapacityQuery,
        member: HostMember::new(PLAYER_MANAGER, "get_MaxPlayers"),
        timing: HookTiming::After,
        target: TargetState::ReturnValue,
    },
    InterceptionBinding {
        moment: HostMoment::CullingInit,
        member: HostMember::new(CULLING, "Awake"),
        timing: HookTiming::After,
        target: TargetState::InstanceField(PLAYER_MAX_COUNT_FIELD),
    },
    InterceptionBinding {
        moment: HostMoment::CullingSpawn,
        member: HostMember::new(CULLING, "OnNetworkSpawn"),
        timing: HookTiming::After,
        target: TargetState::InstanceField(PLAYER_MAX_COUNT_FIELD),
    },
    InterceptionBinding {
        moment: HostMoment::HitRegistrationInit,
        member: HostMember::new(HIT_REGISTRATION, "Awake"),
        timing: HookTiming::After,
        target: TargetState::InstanceField(PLAYER_MAX_COUNT_FIELD),
    },
    InterceptionBinding {
        moment: HostMoment::HitRegistrationSpawn,
        member: HostMember::new(HIT_REGISTRATION, "OnNetworkSpawn"),
        timing: HookTiming::After,
        target: TargetState::InstanceField(PLAYER_MAX_COUNT_FIELD),
    },
];

/// All bindings the override registers, one per [`HostMoment`].
pub fn standard_bindings() -> &'static [InterceptionBinding] {
    &STANDARD_BINDINGS
}

/// Look up the binding registered for a moment.
pub fn binding_for(moment: HostMoment) -> &'static InterceptionBinding {
    let index = match moment {
        HostMoment::SessionStart => 0,
        HostMoment::PlayerCapacityQuery => 1,
        HostMoment::CullingInit => 2,
        HostMoment::CullingSpawn => 3,
        HostMoment::HitRegistrationInit => 4,
        HostMoment::HitRegistrationSpawn => 5,
    };
    &STANDARD_BINDINGS[index]
}
