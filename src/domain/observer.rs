//! Structured event observer for engine outcomes.
//!
//! The engines never reach for a process-wide logger. They emit structured
//! events through an [`EventObserver`] injected at construction time; the
//! production wiring forwards them to `tracing`
//! (see [`crate::infrastructure::observability::TracingObserver`]), while
//! tests can install [`NullObserver`] or a capturing implementation.

/// Severity of an engine event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

/// A structured event emitted by the allocation or resolution engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub severity: Severity,
    /// Logical component that produced the event, e.g. `"allocation"`.
    pub component: &'static str,
    pub message: String,
}

impl Event {
    pub fn info(component: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            component,
            message: message.into(),
        }
    }

    pub fn warn(component: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warn,
            component,
            message: message.into(),
        }
    }

    pub fn error(component: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            component,
            message: message.into(),
        }
    }
}

/// Receiver of engine events.
///
/// Implementations must be cheap and non-blocking; the engines call
/// [`observe`](EventObserver::observe) inline on the request path and are
/// required to work correctly with a no-op observer.
pub trait EventObserver: Send + Sync {
    fn observe(&self, event: Event);
}

/// Observer that discards every event.
#[derive(Debug, Clone, Default)]
pub struct NullObserver;

impl NullObserver {
    pub fn new() -> Self {
        Self
    }
}

impl EventObserver for NullObserver {
    fn observe(&self, _event: Event) {}
}
