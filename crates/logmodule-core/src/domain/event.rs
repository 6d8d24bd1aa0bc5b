//! Log event and enrichment field types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Severity;

/// Structured field keys, in the order they are published
pub mod keys {
    pub const COMPONENT_NAME: &str = "ComponentName";
    pub const CORRELATION_ID: &str = "CorrelationId";
    pub const MEMBER_NAME: &str = "MemberName";
    pub const LINE_NUMBER: &str = "LineNumber";
}

/// Where a log call was issued from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSite {
    /// Name of the invoking function
    pub member: String,
    /// Source line of the call
    pub line: u32,
}

impl CallSite {
    pub fn new(member: impl Into<String>, line: u32) -> Self {
        Self {
            member: member.into(),
            line,
        }
    }

    /// Call site for callers that cannot supply one (`""`, line 0)
    pub fn unknown() -> Self {
        Self::default()
    }
}

/// Structured fields attached to a single log call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedFields {
    /// Component name, already normalized to the configured width
    #[serde(rename = "ComponentName")]
    pub component_name: String,

    #[serde(rename = "CorrelationId")]
    pub correlation_id: String,

    #[serde(rename = "MemberName")]
    pub member_name: String,

    #[serde(rename = "LineNumber")]
    pub line_number: u32,
}

impl EnrichedFields {
    /// Iterate `(key, value)` pairs in publish order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, String)> + '_ {
        [
            (keys::COMPONENT_NAME, self.component_name.clone()),
            (keys::CORRELATION_ID, self.correlation_id.clone()),
            (keys::MEMBER_NAME, self.member_name.clone()),
            (keys::LINE_NUMBER, self.line_number.to_string()),
        ]
        .into_iter()
    }
}

/// A single log call, created and consumed by the dispatcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    #[serde(rename = "ts")]
    pub timestamp: DateTime<Utc>,

    #[serde(rename = "lvl")]
    pub level: Severity,

    #[serde(rename = "msg")]
    pub message: String,

    #[serde(flatten)]
    pub fields: EnrichedFields,
}

impl LogEvent {
    pub fn new(level: Severity, message: impl Into<String>, fields: EnrichedFields) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: message.into(),
            fields,
        }
    }
}
