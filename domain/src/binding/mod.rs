//! Interception bindings
//!
//! A binding names a host lifecycle moment, the host member that marks it,
//! when to run relative to that member, and which piece of host state to
//! overwrite with the effective capacity.
//!
//! The host caches its capacity ceiling in several places and initializes
//! them in an order that differs between hosting and joining. Rather than
//! depend on one order, every place is bound, and culling and
//! hit-registration are bound at both their init and spawn moments.

mod entities;
mod table;

pub use entities::{HookTiming, HostMember, HostMoment, InterceptionBinding, TargetState};
pub use table::{binding_for, standard_bindings};
