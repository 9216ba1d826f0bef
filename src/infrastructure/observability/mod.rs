//! Observability integrations.
//!
//! - [`TracingObserver`] - forwards engine events to `tracing`

pub mod tracing_observer;

pub use tracing_observer::TracingObserver;
