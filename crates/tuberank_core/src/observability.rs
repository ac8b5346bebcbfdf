//! Logging initialization.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tuberank_error::ConfigError;

/// Where log output is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error, for headless commands
    Stderr,
    /// Append to a file, for the terminal UI which owns stdout
    File(PathBuf),
}

/// Install the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` and falls back to `default_filter`.
pub fn init_logging(log_target: &LogTarget, default_filter: &str) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| ConfigError::new(format!("Invalid log filter: {}", e)))?;

    match log_target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| ConfigError::new(format!("Failed to install logger: {}", e)))?,
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ConfigError::new(format!(
                        "Failed to create log directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    ConfigError::new(format!("Failed to open log file {}: {}", path.display(), e))
                })?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| ConfigError::new(format!("Failed to install logger: {}", e)))?;
        }
    }

    debug!(?log_target, "Logger installed");
    info!(version = env!("CARGO_PKG_VERSION"), "TubeRank logging initialized");
    Ok(())
}
