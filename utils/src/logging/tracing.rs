use tracing::Level;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

use std::fs::{create_dir_all, OpenOptions};

use crate::config::LoggingConfig;

/// Builds the stdout filter: `RUST_LOG` when set, otherwise the configured level.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

pub fn start_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    create_dir_all(&config.path)?;
    let level: LevelFilter = config.level.parse().unwrap_or(Level::DEBUG.into());
    let error_logs = OpenOptions::new()
        .append(true)
        .create(true)
        .open(config.error_log_path())?;
    let logs = OpenOptions::new()
        .append(true)
        .create(true)
        .open(config.log_path())?;
    tracing_subscriber::registry()
        .with(
            // log-error file, failed commands and store errors
            fmt::layer()
                .with_ansi(false)
                .with_writer(error_logs)
                .with_filter(LevelFilter::ERROR),
        )
        .with(
            // log file, everything at the configured level
            fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(logs)
                .with_filter(level),
        )
        .with(fmt::Layer::default().with_filter(env_filter(config)))
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_falls_back_to_config() {
        let config = LoggingConfig {
            level: "warn".into(),
            ..Default::default()
        };
        // RUST_LOG is not set by the test harness
        if std::env::var("RUST_LOG").is_err() {
            assert_eq!(env_filter(&config).to_string(), "warn");
        }
    }

    #[test]
    fn test_log_paths() {
        let config = LoggingConfig::default();
        assert_eq!(config.log_path(), "logs/sockbot.log");
        assert_eq!(config.error_log_path(), "logs/error.log");
    }
}
