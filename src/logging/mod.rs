mod init;
pub use init::{init_logging, parse_rotation};
use std::path::PathBuf;
use thiserror::Error;
use tracing::Level;
use tracing_appender::rolling::Rotation;
/// Log filename used when a log directory is configured.
pub const LOG_FILENAME: &str = "suite-checklist.log";
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown log rotation '{0}' (expected daily, hourly or never)")]
pub struct LogRotationError(pub String);
/// Configuration for the logging system.
pub struct LogConfig {
    /// Directory for the rolling log file; stderr only when `None`.
    pub log_dir: Option<PathBuf>,
    /// Default log level when `RUST_LOG` is not set.
    pub log_level: Level,
    pub json_format: bool,
    pub rotation: Rotation,
}
impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            log_level: Level::INFO,
            json_format: false,
            rotation: Rotation::DAILY,
        }
    }
}
#[cfg(test)]
#[path = "../logging_tests.rs"]
mod logging_tests;
