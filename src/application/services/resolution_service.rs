//! Shortcode resolution service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::clock::Clock;
use crate::domain::observer::{Event, EventObserver};
use crate::domain::repositories::LinkStore;
use crate::error::AppError;

/// Observer component tag for resolution events.
const COMPONENT: &str = "resolution";

/// Service resolving shortcodes back to their destination URLs.
///
/// Enforces the expiry predicate and records the access. A record is never
/// deleted on expiry; it simply stops resolving once `now` passes
/// `expires_at`.
pub struct ResolutionService<S: LinkStore, C: Clock> {
    store: Arc<S>,
    clock: Arc<C>,
    observer: Arc<dyn EventObserver>,
}

impl<S: LinkStore, C: Clock> ResolutionService<S, C> {
    /// Creates a new resolution service.
    pub fn new(store: Arc<S>, clock: Arc<C>, observer: Arc<dyn EventObserver>) -> Self {
        Self {
            store,
            clock,
            observer,
        }
    }

    /// Resolves a shortcode to its destination URL and records the access.
    ///
    /// The access-count increment is best-effort: a failed increment is
    /// reported through the observer but the resolution still succeeds, so a
    /// counter hiccup never breaks a redirect.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] - no such code exists
    /// - [`AppError::Expired`] - the code exists but its validity window
    ///   passed; distinct from `NotFound` because the caller-visible
    ///   semantics differ
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let Some(link) = self.store.find_by_code(code).await? else {
            let err = AppError::not_found("Shortcode not found", json!({ "code": code }));
            self.observer
                .observe(Event::warn(COMPONENT, err.to_string()));
            return Err(err);
        };

        if link.is_expired_at(self.clock.now()) {
            let err = AppError::expired(
                "Shortcode has expired",
                json!({ "code": code, "expired_at": link.expires_at }),
            );
            self.observer
                .observe(Event::warn(COMPONENT, err.to_string()));
            return Err(err);
        }

        if let Err(e) = self.store.increment_access_count(code).await {
            self.observer.observe(Event::error(
                COMPONENT,
                format!("Access count update failed for {code}: {e}"),
            ));
        }

        self.observer.observe(Event::info(
            COMPONENT,
            format!("Resolved {code} to {}", link.destination),
        ));

        Ok(link.destination)
    }
}
