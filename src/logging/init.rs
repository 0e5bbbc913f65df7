use color_eyre::eyre::Result;
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use super::{LogConfig, LogRotationError, LOG_FILENAME};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

fn env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("suite_checklist={level}")))
}

/// Initialize the logging system with the given configuration.
///
/// Logs go to stderr, plus a rolling file when `log_dir` is set.
pub fn init_logging(config: LogConfig) -> Result<()> {
    let mut layers: Vec<BoxedLayer> = Vec::new();

    if let Some(log_dir) = &config.log_dir {
        std::fs::create_dir_all(log_dir)?;
        let file_appender =
            RollingFileAppender::new(config.rotation.clone(), log_dir, LOG_FILENAME);
        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_target(true)
            .with_ansi(false);
        layers.push(if config.json_format {
            file_layer
                .json()
                .with_current_span(true)
                .with_filter(env_filter(config.log_level))
                .boxed()
        } else {
            file_layer.with_filter(env_filter(config.log_level)).boxed()
        });
    }

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
    layers.push(if config.json_format {
        stderr_layer
            .json()
            .with_current_span(true)
            .with_filter(env_filter(config.log_level))
            .boxed()
    } else {
        stderr_layer.with_filter(env_filter(config.log_level)).boxed()
    });

    tracing_subscriber::registry()
        .with(layers)
        .with(ErrorLayer::default())
        .try_init()?;
    Ok(())
}

/// Rotation period for the log file: `daily`, `hourly` or `never`, any case.
pub fn parse_rotation(period: &str) -> Result<Rotation, LogRotationError> {
    if period.eq_ignore_ascii_case("daily") {
        Ok(Rotation::DAILY)
    } else if period.eq_ignore_ascii_case("hourly") {
        Ok(Rotation::HOURLY)
    } else if period.eq_ignore_ascii_case("never") {
        Ok(Rotation::NEVER)
    } else {
        Err(LogRotationError(period.to_string()))
    }
}
