//! Domain types

pub mod config;
pub mod event;
pub mod severity;

pub use config::{LogConfig, DEFAULT_COMPONENT_WIDTH};
pub use event::{keys, CallSite, EnrichedFields, LogEvent};
pub use severity::{Channel, Severity};
