//! Backend logger trait
//!
//! The backend owns formatting, filtering and sinks. This crate only
//! chooses which of its six write methods to call and hands it the fields.

use std::sync::Arc;

use crate::domain::{Channel, EnrichedFields};
use crate::error::BackendResult;

/// Backend logger with one write method per channel.
///
/// `fields` is `None` when structured enrichment is disabled.
pub trait LogBackend: Send + Sync {
    fn info(&self, message: &str, fields: Option<&EnrichedFields>) -> BackendResult;

    fn error(&self, message: &str, fields: Option<&EnrichedFields>) -> BackendResult;

    fn warn(&self, message: &str, fields: Option<&EnrichedFields>) -> BackendResult;

    fn debug(&self, message: &str, fields: Option<&EnrichedFields>) -> BackendResult;

    fn fatal(&self, message: &str, fields: Option<&EnrichedFields>) -> BackendResult;

    /// Most detailed channel; receives trace events
    fn verbose(&self, message: &str, fields: Option<&EnrichedFields>) -> BackendResult;

    /// Write to the method matching `channel`
    fn write(
        &self,
        channel: Channel,
        message: &str,
        fields: Option<&EnrichedFields>,
    ) -> BackendResult {
        match channel {
            Channel::Info => self.info(message, fields),
            Channel::Error => self.error(message, fields),
            Channel::Warn => self.warn(message, fields),
            Channel::Debug => self.debug(message, fields),
            Channel::Fatal => self.fatal(message, fields),
            Channel::Verbose => self.verbose(message, fields),
        }
    }
}

/// Backend shared by every dispatcher in the process
pub type SharedBackend = Arc<dyn LogBackend>;
