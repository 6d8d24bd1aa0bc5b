//! Shared test utilities and fixtures for LogModule integration tests.

pub use mocks::{FailingBackend, RecordedWrite, RecordingBackend, ReentrantBackend};

pub use capture::{CaptureLayer, CapturedEvent};

/// Test fixture utilities
pub mod fixtures {
    use super::RecordingBackend;
    use logmodule_core::{LogConfig, LogDispatcher};
    use std::sync::Arc;

    /// Recording backend plus a structured dispatcher over it
    pub fn recording_dispatcher(width: i32) -> (Arc<RecordingBackend>, LogDispatcher) {
        let backend = Arc::new(RecordingBackend::new());
        let config = LogConfig {
            add_structured: true,
            fixed_length_for_component_name: width,
            ..Default::default()
        };
        let dispatcher = LogDispatcher::from_config(backend.clone(), &config);
        (backend, dispatcher)
    }

    /// Component names covering padding, truncation and non-ASCII input
    pub const COMPONENT_NAMES: &[&str] = &[
        "",
        "Db",
        "PaymentService",
        "Company.Product.Billing.PaymentService",
        "Zahlungsdienst-Übersicht",
    ];
}
