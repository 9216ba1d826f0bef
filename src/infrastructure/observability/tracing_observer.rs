//! Engine event forwarding into the `tracing` ecosystem.

use crate::domain::observer::{Event, EventObserver, Severity};

/// Observer that emits every engine event as a `tracing` record.
///
/// The production wiring installs this so allocation/resolution events land
/// in the same subscriber as HTTP request logs.
#[derive(Debug, Clone, Default)]
pub struct TracingObserver;

impl TracingObserver {
    pub fn new() -> Self {
        Self
    }
}

impl EventObserver for TracingObserver {
    fn observe(&self, event: Event) {
        match event.severity {
            Severity::Debug => {
                tracing::debug!(component = event.component, "{}", event.message)
            }
            Severity::Info => tracing::info!(component = event.component, "{}", event.message),
            Severity::Warn => tracing::warn!(component = event.component, "{}", event.message),
            Severity::Error => {
                tracing::error!(component = event.component, "{}", event.message)
            }
        }
    }
}
