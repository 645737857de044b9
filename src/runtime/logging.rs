use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{self, LogSettings};
use crate::error::{Error, Result};

/// Install a file-backed `tracing` subscriber.
///
/// The alternate screen owns stdout, so events go to a daily rolling file.
/// `RUST_LOG` wins over the configured level. Keep the returned guard alive
/// until shutdown or buffered lines are lost.
pub fn init(settings: &LogSettings) -> Result<WorkerGuard> {
    let dir = settings
        .directory
        .clone()
        .or_else(config::default_log_dir)
        .ok_or_else(|| Error::Logging("no log directory: set log.directory or HOME".into()))?;
    fs::create_dir_all(&dir)?;

    let appender = tracing_appender::rolling::daily(&dir, "encore.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.level.trim().to_ascii_lowercase()));

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_target(true)
        .with_ansi(false)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    tracing::info!(dir = %dir.display(), "logging initialised");
    Ok(guard)
}
