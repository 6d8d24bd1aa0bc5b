//! # LogModule Core Library
//!
//! Structured logging facade: enriches each log call with component name,
//! correlation id and call site, then routes it to one of the backend's
//! severity channels.
//!
//! ## Modules
//!
//! - `domain` - Severity, channels, enrichment fields, `LogConfig`
//! - `service` - Context enricher and log dispatcher
//! - `backend` - Backend logger trait
//! - `scope` - Per-thread scoped enrichment context
//! - `error` - Backend and configuration errors
//! - `macros` - Call-site capturing log macros

pub mod backend;
pub mod domain;
pub mod error;
mod macros;
pub mod scope;
pub mod service;

// Re-export commonly used types
pub use backend::{LogBackend, SharedBackend};
pub use domain::*;
pub use error::{BackendError, BackendResult, ConfigError};
pub use scope::EnrichmentScope;
pub use service::*;
