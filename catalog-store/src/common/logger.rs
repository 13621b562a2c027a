//! Logging Infrastructure
//!
//! Structured logging setup: console output always, plus an optional daily
//! rolling file when a log directory is supplied.

use std::fs;
use std::path::Path;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system.
///
/// # Arguments
/// * `level` - default log level when `RUST_LOG` is unset (e.g. "info")
/// * `log_dir` - optional directory for daily rolling file output
pub fn init_logger(level: &str, log_dir: Option<&Path>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match log_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            let file_appender = tracing_appender::rolling::daily(dir, "catalog.log");

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer())
                .with(fmt::layer().with_writer(file_appender).with_ansi(false))
                .try_init()?;
        }
        None => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer())
                .try_init()?;
        }
    }

    Ok(())
}
