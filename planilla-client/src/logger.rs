//! Logging setup
//!
//! Structured logging to stdout, or to a daily rolling file when a log
//! directory is configured. `RUST_LOG` overrides the configured level.

use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// File name prefix of rolling log files
pub const LOG_FILE_PREFIX: &str = "planilla-client";

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the logger with an optional log directory
///
/// Fails if a global subscriber is already installed or the directory
/// cannot be created.
pub fn init_logger(log_level: Option<&str>, log_dir: Option<&str>) -> ClientResult<()> {
    let level = log_level.unwrap_or("info");

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let result = match log_dir {
        Some(dir) => {
            let path = Path::new(dir);
            std::fs::create_dir_all(path)
                .map_err(|e| ClientError::Config(format!("log directory {}: {}", dir, e)))?;
            let file_appender = tracing_appender::rolling::daily(path, LOG_FILE_PREFIX);
            subscriber
                .with_ansi(false)
                .with_writer(file_appender)
                .try_init()
        }
        None => subscriber.try_init(),
    };
    result.map_err(|e| ClientError::Config(format!("logger: {}", e)))
}

/// Initialize the logger from the client configuration
pub fn init_from_config(config: &ClientConfig) -> ClientResult<()> {
    init_logger(Some(&config.log_level), config.log_dir.as_deref())
}
