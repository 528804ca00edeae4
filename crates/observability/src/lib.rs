//! Tracing/logging setup and the tracing-backed catalog observer.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Construction logging for products and categories.
pub mod observer;

pub use observer::TracingObserver;
