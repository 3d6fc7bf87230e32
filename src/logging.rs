//! Tracing setup.
//!
//! Headless commands log to stderr. The interactive survey owns the
//! terminal, so its logs go to a file instead.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default log file for the interactive survey
pub fn default_log_file() -> PathBuf {
    std::env::temp_dir().join("promptpath.log")
}

/// Initialize tracing for the application.
///
/// `RUST_LOG` overrides `level` when set.
pub fn init_tracing(level: &str, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {:?}", path))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_target(false)
                        .with_writer(Arc::new(file)),
                )
                .try_init()
                .context("Failed to install tracing subscriber")?;
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
                .try_init()
                .context("Failed to install tracing subscriber")?;
        }
    }

    Ok(())
}
