//! Subscriber setup: colored console plus daily-rolling file output

use anyhow::{Context, Result};
use logmodule_core::LogConfig;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default log file prefix
pub const LOG_PREFIX: &str = "logmodule";

/// Where the rolling file appender writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFileLocation {
    pub directory: PathBuf,
    pub prefix: String,
    pub suffix: String,
}

impl LogFileLocation {
    /// Location for a config.
    ///
    /// `LogServiceFilePath` names a file (`/var/log/app/payments.log` rolls
    /// as `payments.<date>.log` in `/var/log/app`). A setting that ends with
    /// a path separator, or names an existing directory, is used as the
    /// directory with the default file name. An empty setting, or a path
    /// without a file name, falls back to the default logs directory.
    pub fn for_config(config: &LogConfig) -> Self {
        match config.file_path() {
            Some(path) => Self::from_file_path(&path),
            None => Self::default_location(),
        }
    }

    fn from_file_path(path: &Path) -> Self {
        let names_directory = path
            .to_str()
            .and_then(|s| s.chars().last())
            .is_some_and(std::path::is_separator);
        if names_directory || path.is_dir() {
            return Self {
                directory: path.to_path_buf(),
                ..Self::default_location()
            };
        }

        let prefix = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) if !stem.is_empty() => stem.to_string(),
            _ => return Self::default_location(),
        };
        let suffix = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("log")
            .to_string();
        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Self {
            directory,
            prefix,
            suffix,
        }
    }

    fn default_location() -> Self {
        Self {
            directory: default_logs_dir(),
            prefix: LOG_PREFIX.to_string(),
            suffix: "log".to_string(),
        }
    }
}

/// Default logs directory
///
/// - Windows: %LOCALAPPDATA%/logmodule/logs
/// - macOS: ~/Library/Application Support/logmodule/logs
/// - Linux: ~/.local/share/logmodule/logs
pub fn default_logs_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(LOG_PREFIX)
        .join("logs")
}

/// Install the global subscriber.
///
/// - Console: colored, compact
/// - File: daily rotation, no colors, with thread ids and source lines
///
/// `RUST_LOG` takes precedence over the default `info` filter. The returned
/// guard flushes the file writer and must be kept alive for the lifetime of
/// the program.
pub fn init_tracing(config: &LogConfig) -> Result<WorkerGuard> {
    let location = LogFileLocation::for_config(config);

    std::fs::create_dir_all(&location.directory).with_context(|| {
        format!(
            "Failed to create logs directory {}",
            location.directory.display()
        )
    })?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(&location.prefix)
        .filename_suffix(&location.suffix)
        .build(&location.directory)
        .context("Failed to create log file appender")?;
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = fmt::layer()
        .with_ansi(true)
        .compact()
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_target(true);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_file(true)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("A global tracing subscriber is already installed")?;

    Ok(guard)
}
