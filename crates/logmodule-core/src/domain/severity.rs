//! Severity levels and backend channels

use serde::{Deserialize, Serialize};

/// Log severity, ordered by increasing criticality
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Trace,
    Debug,
    Information,
    Warning,
    Error,
    Fatal,
}

impl Severity {
    /// All severities in ascending order
    pub const ALL: [Severity; 6] = [
        Self::Trace,
        Self::Debug,
        Self::Information,
        Self::Warning,
        Self::Error,
        Self::Fatal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "Trace",
            Self::Debug => "Debug",
            Self::Information => "Information",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Fatal => "Fatal",
        }
    }

    /// Parse a severity name (case-insensitive).
    ///
    /// Accepts the short forms used by most backends as well
    /// (`info`, `warn`, `verbose`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "trace" | "verbose" => Some(Self::Trace),
            "debug" => Some(Self::Debug),
            "information" | "info" => Some(Self::Information),
            "warning" | "warn" => Some(Self::Warning),
            "error" => Some(Self::Error),
            "fatal" => Some(Self::Fatal),
            _ => None,
        }
    }

    /// Map a raw level code (0 = Trace .. 5 = Fatal)
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Trace),
            1 => Some(Self::Debug),
            2 => Some(Self::Information),
            3 => Some(Self::Warning),
            4 => Some(Self::Error),
            5 => Some(Self::Fatal),
            _ => None,
        }
    }

    /// Backend channel this severity is written to
    pub fn channel(&self) -> Channel {
        Channel::for_severity(*self)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Backend write method.
///
/// Names follow the backend, not [`Severity`]: trace events go to `Verbose`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Info,
    Error,
    Warn,
    Debug,
    Fatal,
    Verbose,
}

impl Channel {
    pub fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Information => Self::Info,
            Severity::Error => Self::Error,
            Severity::Warning => Self::Warn,
            Severity::Debug => Self::Debug,
            Severity::Fatal => Self::Fatal,
            Severity::Trace => Self::Verbose,
        }
    }

    /// Channel for a raw level code. Unknown codes fall back to `Info`.
    pub fn for_code(code: i32) -> Self {
        Severity::from_code(code)
            .map(Self::for_severity)
            .unwrap_or(Self::Info)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Debug => "debug",
            Self::Fatal => "fatal",
            Self::Verbose => "verbose",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
