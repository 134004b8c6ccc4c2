//! Logging facilities for ZincX.
//!
//! ZincX uses the `tracing` crate for instrumentation. Nothing is printed
//! unless the application installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```
//!
//! Events are emitted under the targets in [`targets`], so output can be
//! narrowed per subsystem, e.g. `RUST_LOG=zincx::event=trace`.

/// Span names used throughout ZincX for tracing.
pub mod span_names {
    /// One dispatch pass over the event queue.
    pub const DISPATCH: &str = "zincx::dispatch";
    /// One render pass over a view's items.
    pub const RENDER: &str = "zincx::render";
}

/// Target names for log filtering.
pub mod targets {
    /// General application messages, used by [`log`](super::log).
    pub const APP: &str = "zincx";
    /// Core crate target.
    pub const CORE: &str = "zincx_core";
    /// Render backends.
    pub const RENDER: &str = "zincx_render";
    /// Event queue and dispatch.
    pub const EVENT: &str = "zincx::event";
    /// Graphics view.
    pub const VIEW: &str = "zincx::view";
    /// Item arena and item state.
    pub const ITEM: &str = "zincx::item";
}

/// Write a line to the application log.
///
/// This is an `INFO` event on the [`targets::APP`] target.
pub fn log(message: &str) {
    tracing::info!(target: "zincx", "{message}");
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Useful for tracking the duration of an operation.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: "zincx::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Trace-level event on the core target.
#[macro_export]
macro_rules! zincx_trace {
    ($($arg:tt)*) => {
        $crate::tracing::trace!(target: "zincx_core", $($arg)*)
    };
}

/// Debug-level event on the core target.
#[macro_export]
macro_rules! zincx_debug {
    ($($arg:tt)*) => {
        $crate::tracing::debug!(target: "zincx_core", $($arg)*)
    };
}

/// Warn-level event on the core target.
#[macro_export]
macro_rules! zincx_warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!(target: "zincx_core", $($arg)*)
    };
}
