//! Application logging functionality
//!
//! Headless runs log through `tracing-subscriber` to stderr, or to a daily
//! log file under ~/.config/circleplot/logs/ with `--log-file`. Window mode
//! uses Bevy's `LogPlugin` instead (see `core::app::plugins`).

use crate::core::config::ConfigFile;
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// File name prefix for rolling log files
pub const LOG_FILE_PREFIX: &str = "circleplot.log";

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    ConfigFile::config_dir().join("logs")
}

/// Get the path to today's log file
pub fn current_log_file() -> PathBuf {
    let date = chrono::Utc::now().format("%Y-%m-%d");
    logs_dir().join(format!("{LOG_FILE_PREFIX}.{date}"))
}

/// Initialize the logs directory
pub fn initialize_logs_directory() -> anyhow::Result<()> {
    fs::create_dir_all(logs_dir())?;
    Ok(())
}

/// Filter directive for a `-v` count, used when `RUST_LOG` is unset
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "circleplot=warn",
        1 => "circleplot=info",
        2 => "circleplot=debug",
        _ => "circleplot=trace",
    }
}

/// Install the global subscriber for headless runs.
///
/// Returns the file writer guard when logging to a file; dropping it
/// flushes pending lines.
pub fn init_headless(verbosity: u8, log_to_file: bool) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    if log_to_file {
        initialize_logs_directory()?;
        let appender = tracing_appender::rolling::daily(logs_dir(), LOG_FILE_PREFIX);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to set up file logging: {e}"))?;
        eprintln!("Logging to {:?}", current_log_file());
        Ok(Some(guard))
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to set up logging: {e}"))?;
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(default_filter(0), "circleplot=warn");
        assert_eq!(default_filter(2), "circleplot=debug");
        assert_eq!(default_filter(9), "circleplot=trace");
    }

    #[test]
    fn log_file_lives_in_logs_dir() {
        let file = current_log_file();
        assert_eq!(file.parent(), Some(logs_dir().as_path()));
        let name = file.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("circleplot.log."));
    }
}
