//! Correlation id generation

use uuid::Uuid;

/// Fresh correlation id for a new group of related log events
pub fn new_correlation_id() -> String {
    Uuid::new_v4().to_string()
}
