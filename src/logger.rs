use crate::config::DEFAULT_LOG_FILTER;
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Send `tracing` output to `path`. The terminal belongs to the UI, so
/// nothing is written to stdout or stderr.
pub fn init(path: &Path, filter: &str) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter =
        EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(filter)
        .try_init();

    match installed {
        Ok(()) => {
            tracing::info!(path = %path.display(), "logging initialized");
        }
        Err(e) => {
            // Only one global subscriber per process; keep the first one.
            tracing::debug!("logger already initialized: {}", e);
        }
    }
    Ok(())
}
