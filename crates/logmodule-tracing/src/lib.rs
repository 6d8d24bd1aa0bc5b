//! # LogModule tracing backend
//!
//! Provides:
//! - `TracingBackend` - `LogBackend` writing `tracing` events
//! - Colored console output
//! - File logging with daily rotation
//! - Config-driven construction of the dispatcher

mod backend;
mod correlation;
mod factory;
mod subscriber;

pub use backend::{TracingBackend, TARGET};
pub use correlation::new_correlation_id;
pub use factory::{
    build_dispatcher, create_logs_manager, create_logs_manager_from_settings, load_config,
    LogsManager,
};
pub use subscriber::{default_logs_dir, init_tracing, LogFileLocation, LOG_PREFIX};
