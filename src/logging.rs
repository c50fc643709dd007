//! File logging
//!
//! The terminal belongs to the UI, so tracing output goes to a
//! per-session file under the config directory.

use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const APP_ID: &str = "heart-risk-tui";

/// Directory holding the session logs
pub fn log_dir() -> PathBuf {
    Config::config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("logs")
}

fn log_filename() -> String {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    format!("{}.{}.log", APP_ID, timestamp)
}

/// Install the global subscriber
///
/// The returned guard must be kept alive until exit so buffered lines
/// are flushed. Level comes from `RUST_LOG`, defaulting to `info`.
pub fn init() -> Result<WorkerGuard> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)?;

    let file_appender = tracing_appender::rolling::never(&dir, log_filename());
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .with_writer(non_blocking);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}
