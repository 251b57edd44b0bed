use std::{fs::File, path::Path, sync::Mutex};

use anyhow::{Context, Result};

use crate::cli::LogLevel;

/// Sends `tracing` output to `path`. The terminal belongs to the UI, so
/// there is no stderr fallback: without a path nothing is installed.
pub fn init(path: Option<&Path>, level: LogLevel) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::from(level))
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
        .context("failed to install log subscriber")?;
    Ok(())
}
