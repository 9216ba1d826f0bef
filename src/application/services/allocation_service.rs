//! Shortcode allocation service.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde_json::json;

use crate::domain::clock::Clock;
use crate::domain::entities::NewShortLink;
use crate::domain::observer::{Event, EventObserver};
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use crate::utils::destination::validate_destination;

/// Observer component tag for allocation events.
const COMPONENT: &str = "allocation";

/// Minimum validity window in minutes.
pub const MIN_VALIDITY_MINUTES: i64 = 1;

/// Maximum validity window in minutes (one year).
pub const MAX_VALIDITY_MINUTES: i64 = 525_600;

/// Maximum random candidates drawn before giving up on allocation.
const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Result of a successful allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

/// Service binding new shortcodes to destination URLs.
///
/// Validates input, picks a free code (caller-supplied alias or random
/// candidates), computes the expiry, and inserts the record. Uniqueness is
/// ultimately enforced by the store's conditional insert; the existence
/// pre-checks only avoid wasted draws.
pub struct AllocationService<S: LinkStore, C: Clock> {
    store: Arc<S>,
    clock: Arc<C>,
    observer: Arc<dyn EventObserver>,
}

impl<S: LinkStore, C: Clock> AllocationService<S, C> {
    /// Creates a new allocation service.
    pub fn new(store: Arc<S>, clock: Arc<C>, observer: Arc<dyn EventObserver>) -> Self {
        Self {
            store,
            clock,
            observer,
        }
    }

    /// Binds a shortcode to `destination` for `validity_minutes`.
    ///
    /// # Arguments
    ///
    /// - `destination` - URL to redirect to; must start with `http://` or `https://`
    /// - `validity_minutes` - validity window, 1 minute to 1 year
    /// - `custom_code` - optional caller-supplied alias (validated if provided)
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] - malformed destination, validity out of
    ///   range, or malformed custom alias; nothing is inserted
    /// - [`AppError::Conflict`] - the code is already taken, either the custom
    ///   alias up front or a candidate that appeared between the existence
    ///   check and the insert
    /// - [`AppError::ExhaustedRetries`] - 10 random candidates all collided
    pub async fn allocate(
        &self,
        destination: String,
        validity_minutes: i64,
        custom_code: Option<String>,
    ) -> Result<Allocation, AppError> {
        validate_destination(&destination).inspect_err(|e| self.warn(e))?;

        if !(MIN_VALIDITY_MINUTES..=MAX_VALIDITY_MINUTES).contains(&validity_minutes) {
            let err = AppError::bad_request(
                "Validity must be between 1 and 525600 minutes",
                json!({ "validity_minutes": validity_minutes }),
            );
            self.warn(&err);
            return Err(err);
        }

        let code = if let Some(custom) = custom_code {
            validate_custom_code(&custom).inspect_err(|e| self.warn(e))?;

            if self.store.exists(&custom).await? {
                let err = AppError::conflict(
                    "Shortcode already taken",
                    json!({ "code": custom }),
                );
                self.warn(&err);
                return Err(err);
            }

            custom
        } else {
            self.generate_unique_code().await?
        };

        let expires_at = self.clock.now() + Duration::minutes(validity_minutes);

        // The insert is the sole arbiter of uniqueness: the existence checks
        // above may be stale by now.
        let inserted = self
            .store
            .insert_if_absent(NewShortLink {
                code: code.clone(),
                destination,
                expires_at,
            })
            .await?;

        if !inserted {
            let err = AppError::conflict(
                "Shortcode already taken",
                json!({ "code": code }),
            );
            self.warn(&err);
            return Err(err);
        }

        self.observer.observe(Event::info(
            COMPONENT,
            format!("Allocated shortcode {code}, expires at {expires_at}"),
        ));

        Ok(Allocation { code, expires_at })
    }

    /// Draws random candidates until one is free, up to 10 attempts.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let code = generate_code();

            if !self.store.exists(&code).await? {
                return Ok(code);
            }
        }

        let err = AppError::exhausted_retries(
            "Could not find a free shortcode",
            json!({ "attempts": MAX_GENERATION_ATTEMPTS }),
        );
        self.observer
            .observe(Event::error(COMPONENT, err.to_string()));
        Err(err)
    }

    fn warn(&self, err: &AppError) {
        self.observer
            .observe(Event::warn(COMPONENT, err.to_string()));
    }
}
