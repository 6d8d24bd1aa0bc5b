//! Enrichment and dispatch services

pub mod dispatcher;
pub mod enricher;

pub use dispatcher::LogDispatcher;
pub use enricher::{normalize, ContextEnricher};
