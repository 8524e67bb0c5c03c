//! Plugin entry point
//!
//! Wires the layers together with explicit dependency injection: the
//! settings file source feeds the resolver, the resolver is handed to the
//! coordinator as a [`CapacitySource`], and the coordinator installs its
//! bindings through whatever [`HookInstaller`] the host side provides.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use capacity_application::{
    CapacityResolver, CapacitySource, HookInstaller, OverrideCoordinator, RegistrationReport,
};
use capacity_infrastructure::{ConfigLoader, FileConfig, FileSettingsSource};
use tracing::{info, warn};

use crate::logging::{LoggingGuard, init_logging};

/// A loaded plugin with its bindings registered.
pub struct CapacityOverridePlugin {
    coordinator: OverrideCoordinator,
    report: RegistrationReport,
    _logging: Option<LoggingGuard>,
}

impl CapacityOverridePlugin {
    /// Build the override from `config` and register every binding.
    ///
    /// Fails only if no binding at all could be installed. Partial
    /// installation is logged and kept: each binding stands on its own.
    pub fn load(config: &FileConfig, installer: &mut dyn HookInstaller) -> Result<Self> {
        Self::build(config, installer, None)
    }

    /// Load bootstrap configuration, start logging, then [`load`](Self::load).
    pub fn load_from_environment(
        config_path: Option<&Path>,
        installer: &mut dyn HookInstaller,
    ) -> Result<Self> {
        let config =
            ConfigLoader::load(config_path).context("failed to load capacity-override config")?;
        let logging = init_logging(&config.log);

        Self::build(&config, installer, Some(logging))
    }

    fn build(
        config: &FileConfig,
        installer: &mut dyn HookInstaller,
        logging: Option<LoggingGuard>,
    ) -> Result<Self> {
        let source =
            FileSettingsSource::for_plugin(&config.settings.config_dir, &config.settings.plugin_id);
        let settings_path = source.path().display().to_string();

        let resolver = Arc::new(CapacityResolver::new(source));
        let initial = resolver.resolve_detailed();
        let coordinator = OverrideCoordinator::new(resolver as Arc<dyn CapacitySource>);

        info!(
            plugin_id = %config.settings.plugin_id,
            settings = %settings_path,
            capacity = initial.value.value(),
            effective = initial.value.effective().value(),
            defaulted = initial.is_default(),
            "Capacity override plugin loaded"
        );

        let report = coordinator.register(installer);
        if report.installed.is_empty() {
            bail!(
                "no capacity bindings could be installed ({} failed)",
                report.failed.len()
            );
        }
        if report.is_complete() {
            info!(bindings = report.installed.len(), "All capacity bindings registered");
        } else {
            warn!(
                installed = report.installed.len(),
                failed = report.failed.len(),
                "Some capacity bindings could not be registered"
            );
        }

        Ok(Self {
            coordinator,
            report,
            _logging: logging,
        })
    }

    pub fn coordinator(&self) -> &OverrideCoordinator {
        &self.coordinator
    }

    pub fn report(&self) -> &RegistrationReport {
        &self.report
    }
}
