//! Capacity source port
//!
//! The narrow capability the override coordinator depends on. Implemented by
//! [`CapacityResolver`](crate::use_cases::resolve_capacity::CapacityResolver).

use capacity_domain::ResolvedCapacity;

/// Supplies the operator-configured capacity.
///
/// Implementations never fail: they fall back to a default and report the
/// reason themselves.
pub trait CapacitySource: Send + Sync {
    fn resolve(&self) -> ResolvedCapacity;
}
