//! `LogConfig` settings section

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::ConfigError;

/// Default display width of the `ComponentName` field
pub const DEFAULT_COMPONENT_WIDTH: i32 = 20;

/// Name of the settings section holding [`LogConfig`]
pub const SECTION: &str = "LogConfig";

/// Environment override keys
pub mod env_keys {
    pub const FILE_PATH: &str = "LOGCONFIG_FILE_PATH";
    pub const ADD_SERILOG: &str = "LOGCONFIG_ADD_SERILOG";
    pub const FIXED_LENGTH: &str = "LOGCONFIG_FIXED_LENGTH";
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Override for the log file location. Empty means the default directory.
    #[serde(rename = "LogServiceFilePath")]
    pub log_service_file_path: String,

    /// Whether the structured backend and field enrichment are active.
    ///
    /// Defaults to `false`: a dispatcher built from the default config
    /// writes bare messages without the four enrichment fields.
    #[serde(rename = "AddSerilog", alias = "AddStructured")]
    pub add_structured: bool,

    /// Display width of the `ComponentName` field
    #[serde(rename = "FixedLengthForComponentName")]
    pub fixed_length_for_component_name: i32,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_service_file_path: String::new(),
            add_structured: false,
            fixed_length_for_component_name: DEFAULT_COMPONENT_WIDTH,
        }
    }
}

#[derive(Deserialize)]
struct SettingsDocument {
    #[serde(rename = "LogConfig", default)]
    log_config: Option<LogConfig>,
}

impl LogConfig {
    /// Read the `LogConfig` section of a JSON settings document.
    ///
    /// A document without the section yields the defaults.
    pub fn from_settings_json(json: &str) -> Result<Self, ConfigError> {
        let doc: SettingsDocument = serde_json::from_str(json)?;
        Ok(doc.log_config.unwrap_or_default())
    }

    /// Load the `LogConfig` section from a settings file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_settings_json(&content)
    }

    /// Apply `LOGCONFIG_*` overrides from the process environment
    pub fn apply_env_overrides(self) -> Result<Self, ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(env_keys::FILE_PATH) {
            debug!("[LogConfig] {} override: {}", env_keys::FILE_PATH, path);
            self.log_service_file_path = path;
        }

        if let Some(value) = lookup(env_keys::ADD_SERILOG) {
            self.add_structured = match value.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: env_keys::ADD_SERILOG.to_string(),
                        value,
                    })
                }
            };
        }

        if let Some(value) = lookup(env_keys::FIXED_LENGTH) {
            self.fixed_length_for_component_name =
                value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue {
                        key: env_keys::FIXED_LENGTH.to_string(),
                        value: value.clone(),
                    })?;
        }

        Ok(self)
    }

    /// Explicit log file override, if configured
    pub fn file_path(&self) -> Option<PathBuf> {
        let trimmed = self.log_service_file_path.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(PathBuf::from(trimmed))
        }
    }
}
