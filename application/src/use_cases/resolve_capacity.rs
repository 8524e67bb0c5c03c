//! Resolve capacity use case
//!
//! Turns the persisted settings text into a [`ResolvedCapacity`] without
//! ever failing. Every failure collapses to [`DEFAULT_CAPACITY`] plus a
//! warning.
//!
//! The settings are re-read on every call: the file may not exist yet or
//! may change between two host moments.

use crate::ports::capacity_source::CapacitySource;
use crate::ports::settings_source::{SettingsReadError, SettingsSource};
use capacity_domain::{
    CAPACITY_SETTING_KEY, DEFAULT_CAPACITY, ResolveFailure, ResolvedCapacity,
    scan_capacity_setting,
};
use tracing::{debug, warn};

/// Outcome of a single resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityResolution {
    pub value: ResolvedCapacity,
    /// Why the default was used, if it was.
    pub failure: Option<ResolveFailure>,
}

impl CapacityResolution {
    pub fn is_default(&self) -> bool {
        self.failure.is_some()
    }
}

/// Reads the capacity setting straight from a [`SettingsSource`].
pub struct CapacityResolver<S> {
    source: S,
}

impl<S: SettingsSource> CapacityResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolve the capacity and report how it was obtained.
    pub fn resolve_detailed(&self) -> CapacityResolution {
        let location = self.source.location();

        let scanned = match self.source.read_settings() {
            Ok(text) => scan_capacity_setting(&text, CAPACITY_SETTING_KEY),
            Err(SettingsReadError::NotFound { path }) => {
                Err(ResolveFailure::ConfigMissing { path })
            }
            Err(err @ SettingsReadError::Io { .. }) => Err(ResolveFailure::IoFailure {
                message: err.to_string(),
            }),
        };

        match scanned {
            Ok(value) => {
                debug!(path = %location, capacity = value.value(), "Resolved capacity setting");
                CapacityResolution {
                    value,
                    failure: None,
                }
            }
            Err(failure) => {
                warn!(
                    path = %location,
                    reason = failure.kind(),
                    default = DEFAULT_CAPACITY,
                    "{}; using default capacity",
                    failure
                );
                CapacityResolution {
                    value: ResolvedCapacity::default(),
                    failure: Some(failure),
                }
            }
        }
    }
}

impl<S: SettingsSource> CapacitySource for CapacityResolver<S> {
    fn resolve(&self) -> ResolvedCapacity {
        self.resolve_detailed().value
    }
}
