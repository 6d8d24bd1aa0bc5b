//! `tracing` backend
//!
//! Every channel becomes one `tracing` event with target [`TARGET`]. The
//! enrichment fields are recorded as `component_name`, `correlation_id`,
//! `member_name` and `line_number`. `tracing` has no fatal level, so fatal
//! events are written at ERROR with `fatal = true`.

use logmodule_core::{BackendResult, EnrichedFields, LogBackend};
use tracing::{debug, error, info, trace, warn};

/// Target of every event written by [`TracingBackend`]
pub const TARGET: &str = "logmodule";

macro_rules! write_event {
    ($event:ident, $message:expr, $fields:expr $(, $extra:ident = $value:expr)*) => {
        match $fields {
            Some(f) => $event!(
                target: TARGET,
                component_name = %f.component_name,
                correlation_id = %f.correlation_id,
                member_name = %f.member_name,
                line_number = f.line_number,
                $($extra = $value,)*
                "{}",
                $message
            ),
            None => $event!(target: TARGET, $($extra = $value,)* "{}", $message),
        }
    };
}

/// Writes log calls to the current `tracing` subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingBackend;

impl TracingBackend {
    pub fn new() -> Self {
        Self
    }
}

impl LogBackend for TracingBackend {
    fn info(&self, message: &str, fields: Option<&EnrichedFields>) -> BackendResult {
        write_event!(info, message, fields);
        Ok(())
    }

    fn error(&self, message: &str, fields: Option<&EnrichedFields>) -> BackendResult {
        write_event!(error, message, fields);
        Ok(())
    }

    fn warn(&self, message: &str, fields: Option<&EnrichedFields>) -> BackendResult {
        write_event!(warn, message, fields);
        Ok(())
    }

    fn debug(&self, message: &str, fields: Option<&EnrichedFields>) -> BackendResult {
        write_event!(debug, message, fields);
        Ok(())
    }

    fn fatal(&self, message: &str, fields: Option<&EnrichedFields>) -> BackendResult {
        write_event!(error, message, fields, fatal = true);
        Ok(())
    }

    fn verbose(&self, message: &str, fields: Option<&EnrichedFields>) -> BackendResult {
        write_event!(trace, message, fields);
        Ok(())
    }
}
