//! Logging setup
//!
//! Console output always, plus an optional non-blocking file writer. The
//! host process may already own the global subscriber; in that case nothing
//! is installed, no file writer is started, and log lines flow into the
//! host's subscriber.

use capacity_infrastructure::FileLogConfig;
use tracing::{debug, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Keeps the file writer flushing. Dropping it flushes and stops file output.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    _file: Option<WorkerGuard>,
}

impl LoggingGuard {
    /// Whether a log file writer is running.
    pub fn is_file_logging(&self) -> bool {
        self._file.is_some()
    }
}

/// Install the global subscriber described by `config`.
pub fn init_logging(config: &FileLogConfig) -> LoggingGuard {
    if tracing::dispatcher::has_been_set() {
        debug!("Global subscriber already installed by host; reusing it");
        return LoggingGuard { _file: None };
    }

    let (env_filter, filter_error) = match EnvFilter::try_new(&config.filter) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new("info"), Some(e)),
    };

    let mut file_error = None;
    let (file_layer, guard) = match &config.directory {
        Some(directory) => match RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(config.file_name.as_str())
            .build(directory)
        {
            Ok(appender) => {
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                file_error = Some(e);
                (None, None)
            }
        },
        None => (None, None),
    };

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(file_layer)
        .try_init()
        .is_ok();

    // Lost a race with the host: stop the writer thread nobody feeds.
    let guard = if installed { guard } else { None };
    if !installed {
        debug!("Global subscriber already installed by host; reusing it");
    }
    if let Some(e) = filter_error {
        warn!(filter = %config.filter, error = %e, "Invalid log filter; falling back to info");
    }
    if let Some(e) = file_error {
        warn!(error = %e, "Could not open log file; logging to console only");
    }

    LoggingGuard { _file: guard }
}
