//! Log dispatcher - single entry point for all severities

use crate::backend::SharedBackend;
use crate::domain::{CallSite, Channel, LogConfig, LogEvent, Severity};
use crate::error::BackendResult;
use crate::scope::EnrichmentScope;

use super::enricher::ContextEnricher;

/// Enriches log calls and routes them to the backend channel for their level.
///
/// Cheap to clone; clones share the backend.
///
/// # Example
/// ```ignore
/// let logs = LogDispatcher::new(backend);
/// logs.error("disk full", "PaymentService", "Corr123", CallSite::new("charge", 42))?;
/// ```
#[derive(Clone)]
pub struct LogDispatcher {
    backend: SharedBackend,
    enricher: ContextEnricher,
    structured: bool,
}

impl LogDispatcher {
    /// Dispatcher with the default width and enrichment enabled
    pub fn new(backend: SharedBackend) -> Self {
        Self {
            backend,
            enricher: ContextEnricher::default(),
            structured: true,
        }
    }

    /// Dispatcher configured from a `LogConfig` section
    pub fn from_config(backend: SharedBackend, config: &LogConfig) -> Self {
        Self::new(backend)
            .with_width(config.fixed_length_for_component_name)
            .with_structured(config.add_structured)
    }

    /// Set the component-name display width
    pub fn with_width(mut self, width: i32) -> Self {
        self.enricher = ContextEnricher::new(width);
        self
    }

    /// Enable or disable field enrichment
    pub fn with_structured(mut self, structured: bool) -> Self {
        self.structured = structured;
        self
    }

    pub fn enricher(&self) -> &ContextEnricher {
        &self.enricher
    }

    pub fn is_structured(&self) -> bool {
        self.structured
    }

    pub fn information(
        &self,
        message: &str,
        component_name: &str,
        correlation_id: &str,
        call_site: CallSite,
    ) -> BackendResult {
        self.emit(Severity::Information, message, component_name, correlation_id, call_site)
    }

    pub fn error(
        &self,
        message: &str,
        component_name: &str,
        correlation_id: &str,
        call_site: CallSite,
    ) -> BackendResult {
        self.emit(Severity::Error, message, component_name, correlation_id, call_site)
    }

    pub fn warning(
        &self,
        message: &str,
        component_name: &str,
        correlation_id: &str,
        call_site: CallSite,
    ) -> BackendResult {
        self.emit(Severity::Warning, message, component_name, correlation_id, call_site)
    }

    pub fn debug(
        &self,
        message: &str,
        component_name: &str,
        correlation_id: &str,
        call_site: CallSite,
    ) -> BackendResult {
        self.emit(Severity::Debug, message, component_name, correlation_id, call_site)
    }

    pub fn fatal(
        &self,
        message: &str,
        component_name: &str,
        correlation_id: &str,
        call_site: CallSite,
    ) -> BackendResult {
        self.emit(Severity::Fatal, message, component_name, correlation_id, call_site)
    }

    /// Trace events are written to the backend's verbose channel
    pub fn trace(
        &self,
        message: &str,
        component_name: &str,
        correlation_id: &str,
        call_site: CallSite,
    ) -> BackendResult {
        self.emit(Severity::Trace, message, component_name, correlation_id, call_site)
    }

    /// Enrich and write one event at `level`
    pub fn emit(
        &self,
        level: Severity,
        message: &str,
        component_name: &str,
        correlation_id: &str,
        call_site: CallSite,
    ) -> BackendResult {
        let event = self.event(level, message, component_name, correlation_id, &call_site);
        self.dispatch(level.channel(), &event)
    }

    /// Like [`emit`](Self::emit) for a raw level code (0 = Trace .. 5 = Fatal).
    /// Unknown codes are written to the info channel as `Information`.
    pub fn emit_code(
        &self,
        code: i32,
        message: &str,
        component_name: &str,
        correlation_id: &str,
        call_site: CallSite,
    ) -> BackendResult {
        let level = Severity::from_code(code).unwrap_or(Severity::Information);
        let event = self.event(level, message, component_name, correlation_id, &call_site);
        self.dispatch(Channel::for_code(code), &event)
    }

    /// Build the event for one call. `emit` writes exactly this value.
    pub fn event(
        &self,
        level: Severity,
        message: &str,
        component_name: &str,
        correlation_id: &str,
        call_site: &CallSite,
    ) -> LogEvent {
        let fields = self.enricher.build_fields(component_name, correlation_id, call_site);
        LogEvent::new(level, message, fields)
    }

    fn dispatch(&self, channel: Channel, event: &LogEvent) -> BackendResult {
        if !self.structured {
            return self.backend.write(channel, &event.message, None);
        }

        // Popped when `_scope` drops, including when the write fails
        let _scope = EnrichmentScope::push(event.fields.clone());
        self.backend.write(channel, &event.message, Some(&event.fields))
    }
}

impl std::fmt::Debug for LogDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogDispatcher")
            .field("enricher", &self.enricher)
            .field("structured", &self.structured)
            .finish_non_exhaustive()
    }
}
