use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::FmtSubscriber;

const LOG_FILE: &str = "persona-kit.log";

/// Sends tracing output to a log file in `dir`. The terminal belongs to the
/// UI, so nothing is written to stdout or stderr.
pub fn init(dir: &Path, level: LevelFilter) -> Result<()> {
    fs::create_dir_all(dir)?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("failed to set global tracing")?;
    Ok(())
}
