//! Capacity value objects
//!
//! The operator configures how many non-privileged participants a session
//! admits ([`ResolvedCapacity`]). The host is always handed that number plus
//! the reserved slots ([`EffectiveCapacity`]).

mod value_objects;

pub use value_objects::{DEFAULT_CAPACITY, EffectiveCapacity, RESERVED_SLOTS, ResolvedCapacity};
