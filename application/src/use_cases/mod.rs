//! Use cases (application services)

pub mod override_capacity;
pub mod resolve_capacity;
