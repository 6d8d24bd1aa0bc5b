//! Wires `LogConfig` → subscriber → backend → dispatcher

use anyhow::{Context, Result};
use logmodule_core::{LogConfig, LogDispatcher};
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

use crate::backend::TracingBackend;
use crate::subscriber::init_tracing;

/// Dispatcher plus the file writer guard that keeps it flushing.
///
/// Dropping it flushes and closes the log file; keep it alive for the
/// lifetime of the program.
pub struct LogsManager {
    dispatcher: LogDispatcher,
    _guard: WorkerGuard,
}

impl LogsManager {
    pub fn dispatcher(&self) -> &LogDispatcher {
        &self.dispatcher
    }
}

impl std::ops::Deref for LogsManager {
    type Target = LogDispatcher;

    fn deref(&self) -> &Self::Target {
        &self.dispatcher
    }
}

/// Dispatcher over a [`TracingBackend`], without touching the global subscriber
pub fn build_dispatcher(config: &LogConfig) -> LogDispatcher {
    LogDispatcher::from_config(Arc::new(TracingBackend::new()), config)
}

/// Install the subscriber described by `config` and return the dispatcher
pub fn create_logs_manager(config: &LogConfig) -> Result<LogsManager> {
    let guard = init_tracing(config)?;
    info!(target: crate::backend::TARGET, "Logger initialized.");

    Ok(LogsManager {
        dispatcher: build_dispatcher(config),
        _guard: guard,
    })
}

/// Read the `LogConfig` section of a settings file (plus `.env` and
/// `LOGCONFIG_*` overrides) and install logging from it
pub fn create_logs_manager_from_settings(settings_path: &Path) -> Result<LogsManager> {
    let config = load_config(settings_path)?;
    create_logs_manager(&config)
}

/// Load `LogConfig` from a settings file with `.env` / environment overrides
pub fn load_config(settings_path: &Path) -> Result<LogConfig> {
    // Load .env file if present (for development)
    dotenvy::dotenv().ok();

    let config = LogConfig::load(settings_path)
        .with_context(|| format!("Failed to load LogConfig from {}", settings_path.display()))?;
    config
        .apply_env_overrides()
        .context("Invalid LOGCONFIG_* override")
}
