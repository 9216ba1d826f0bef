//! Short link entity representing an expiring shortcode mapping.

use chrono::{DateTime, Utc};

/// A shortcode bound to a destination URL for a limited validity window.
///
/// The `code` is the primary key; `expires_at` is fixed at creation time and
/// never changes afterwards. `access_count` only grows, once per successful
/// resolution of a non-expired record.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortLink {
    pub code: String,
    pub destination: String,
    pub expires_at: DateTime<Utc>,
    pub access_count: i64,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(
        code: String,
        destination: String,
        expires_at: DateTime<Utc>,
        access_count: i64,
    ) -> Self {
        Self {
            code,
            destination,
            expires_at,
            access_count,
        }
    }

    /// Returns true if the validity window has passed at the given instant.
    ///
    /// Expiry is a computed predicate, not a lifecycle transition: a record
    /// whose window has passed stays in the store and simply stops resolving.
    /// The boundary instant itself still resolves (`now == expires_at` is not
    /// expired).
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// Input data for inserting a new short link.
///
/// `access_count` is absent on purpose: every record starts at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShortLink {
    pub code: String,
    pub destination: String,
    pub expires_at: DateTime<Utc>,
}
