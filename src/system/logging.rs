//! Logging system initialization
//!
//! This module sets up the tracing/logging system from the `[logging]`
//! section of the static configuration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

use crate::config::LoggingConfig;

/// Where log lines end up
#[derive(Debug, Clone, PartialEq, Eq)]
enum LogTarget<'a> {
    Stdout,
    Rolling { dir: &'a Path, prefix: &'a str },
    File(&'a str),
}

fn log_target(config: &LoggingConfig) -> LogTarget<'_> {
    match config.file.as_deref() {
        Some(file) if !file.is_empty() && config.enable_rotation => {
            let path = Path::new(file);
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let prefix = path
                .file_name()
                .and_then(|f| f.to_str())
                .unwrap_or("shorturl.log")
                .trim_end_matches(".log");
            LogTarget::Rolling { dir, prefix }
        }
        Some(file) if !file.is_empty() => LogTarget::File(file),
        _ => LogTarget::Stdout,
    }
}

/// Initialize logging system based on configuration
///
/// **Note**: This should be called only once during application startup,
/// after the configuration has been loaded.
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let target = log_target(config);

    let writer: Box<dyn std::io::Write + Send + Sync> = match target {
        LogTarget::Rolling { dir, prefix } => {
            let appender = rolling::Builder::new()
                .rotation(rolling::Rotation::DAILY)
                .filename_prefix(prefix)
                .filename_suffix("log")
                .max_log_files(config.max_backups.max(1) as usize)
                .build(dir)
                .context("Failed to create rolling log appender")?;
            Box::new(appender)
        }
        LogTarget::File(file) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(file)
                .with_context(|| format!("Failed to open log file {}", file))?;
            Box::new(file)
        }
        LogTarget::Stdout => Box::new(std::io::stdout()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(target == LogTarget::Stdout);

    let installed = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    installed.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logging(file: Option<&str>, enable_rotation: bool) -> LoggingConfig {
        LoggingConfig {
            file: file.map(str::to_string),
            enable_rotation,
            ..LoggingConfig::default()
        }
    }

    #[test]
    fn test_stdout_when_no_file() {
        assert_eq!(log_target(&logging(None, true)), LogTarget::Stdout);
        assert_eq!(log_target(&logging(Some(""), true)), LogTarget::Stdout);
    }

    #[test]
    fn test_rolling_target() {
        let config = logging(Some("logs/shorturl.log"), true);
        assert_eq!(
            log_target(&config),
            LogTarget::Rolling {
                dir: Path::new("logs"),
                prefix: "shorturl"
            }
        );

        let bare = logging(Some("app.log"), true);
        assert_eq!(
            log_target(&bare),
            LogTarget::Rolling {
                dir: Path::new("."),
                prefix: "app"
            }
        );
    }

    #[test]
    fn test_plain_file_target() {
        let config = logging(Some("server.log"), false);
        assert_eq!(log_target(&config), LogTarget::File("server.log"));
    }
}
