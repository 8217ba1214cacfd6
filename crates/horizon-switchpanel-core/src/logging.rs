//! Logging facilities for Horizon SwitchPanel.
//!
//! This module provides:
//! - Integration with the `tracing` crate for structured logging
//! - Target name constants for log filtering
//! - Performance tracing hooks for profiling
//!
//! # Tracing Integration
//!
//! Horizon SwitchPanel uses the `tracing` crate for instrumentation. To see
//! logs, install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Panel-side events (partition commits, measurement, item updates) log under
//! the `horizon_switchpanel` target hierarchy; signal dispatch logs under
//! `horizon_switchpanel_core::signal`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_switchpanel_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_switchpanel_core::signal";
    /// Performance span target.
    pub const PERF: &str = "horizon_switchpanel_core::perf";
}

/// A guard that emits a tracing span when dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Macros for common tracing patterns.
///
/// These are re-exported for convenience but are just wrappers around
/// the `tracing` crate macros with consistent target naming.
#[macro_export]
macro_rules! switchpanel_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "horizon_switchpanel_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! switchpanel_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "horizon_switchpanel_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! switchpanel_info {
    ($($arg:tt)*) => {
        tracing::info!(target: "horizon_switchpanel_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! switchpanel_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "horizon_switchpanel_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! switchpanel_error {
    ($($arg:tt)*) => {
        tracing::error!(target: "horizon_switchpanel_core", $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span() {
        // Just ensure it compiles and doesn't panic
        let _span = PerfSpan::new("test_operation");
    }

    #[test]
    fn test_targets_are_prefixed() {
        assert!(targets::SIGNAL.starts_with(targets::CORE));
        assert!(targets::PERF.starts_with(targets::CORE));
    }

    #[test]
    fn test_logging_macros_expand() {
        switchpanel_trace!("trace message");
        switchpanel_debug!(value = 1, "debug message");
        switchpanel_info!("info message");
        switchpanel_warn!("warn message");
        switchpanel_error!("error message");
    }
}
