//! Call-site capturing macros
//!
//! ```ignore
//! use logmodule_core::{log_error, log_information};
//!
//! fn charge(logs: &LogDispatcher) -> Result<(), BackendError> {
//!     log_information!(logs, "charging card", "PaymentService")?;
//!     log_error!(logs, "disk full", "PaymentService", "Corr123")?;
//!     Ok(())
//! }
//! ```
//!
//! Each macro fills `MemberName` with the enclosing function (`charge`) and
//! `LineNumber` with the line of the macro invocation.

/// Name of the enclosing function, without its module path
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __type_name_of(__here);
        let name = name.strip_suffix("::__here").unwrap_or(name);
        let name = name.trim_end_matches("::{{closure}}");
        name.rsplit("::").next().unwrap_or(name)
    }};
}

/// [`CallSite`](crate::CallSite) for the current location
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new($crate::function_name!(), line!())
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_at {
    ($level:ident, $logs:expr, $message:expr, $component:expr $(,)?) => {
        $logs.emit(
            $crate::Severity::$level,
            $message,
            $component,
            "",
            $crate::call_site!(),
        )
    };
    ($level:ident, $logs:expr, $message:expr, $component:expr, $correlation:expr $(,)?) => {
        $logs.emit(
            $crate::Severity::$level,
            $message,
            $component,
            $correlation,
            $crate::call_site!(),
        )
    };
}

/// `log_information!(logs, message, component [, correlation_id])`
#[macro_export]
macro_rules! log_information {
    ($($args:tt)+) => { $crate::__log_at!(Information, $($args)+) };
}

/// `log_error!(logs, message, component [, correlation_id])`
#[macro_export]
macro_rules! log_error {
    ($($args:tt)+) => { $crate::__log_at!(Error, $($args)+) };
}

/// `log_warning!(logs, message, component [, correlation_id])`
#[macro_export]
macro_rules! log_warning {
    ($($args:tt)+) => { $crate::__log_at!(Warning, $($args)+) };
}

/// `log_debug!(logs, message, component [, correlation_id])`
#[macro_export]
macro_rules! log_debug {
    ($($args:tt)+) => { $crate::__log_at!(Debug, $($args)+) };
}

/// `log_fatal!(logs, message, component [, correlation_id])`
#[macro_export]
macro_rules! log_fatal {
    ($($args:tt)+) => { $crate::__log_at!(Fatal, $($args)+) };
}

/// `log_trace!(logs, message, component [, correlation_id])`
#[macro_export]
macro_rules! log_trace {
    ($($args:tt)+) => { $crate::__log_at!(Trace, $($args)+) };
}
