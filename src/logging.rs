//! Tracing subscriber setup.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` if set, else the configured default.
fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Logs to a file so output does not interfere with the terminal UI.
pub fn init_file_logging(path: &Path, default_filter: &str) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't fail if already initialized

    info!(path = %path.display(), "File logging initialized");
    Ok(())
}

/// Logs to stderr, leaving stdout for command output.
pub fn init_stderr_logging(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_writer(std::io::stderr)
        .try_init();
}
