//! Repository trait for short link data access.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Store interface for the shortcode mapping table.
///
/// The store is the only shared mutable state of the service, so the two
/// mutating operations carry the atomicity the engines rely on:
/// [`insert_if_absent`](LinkStore::insert_if_absent) is the sole arbiter of
/// code uniqueness, and
/// [`increment_access_count`](LinkStore::increment_access_count) is a single
/// read-modify-write inside the store.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkStore`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/store_sqlite.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Inserts a new short link unless its code is already present.
    ///
    /// The check and the insert are a single atomic store operation: when two
    /// callers race on one code, exactly one observes `true` and the other
    /// `false`. The record is never overwritten.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the record was inserted
    /// - `Ok(false)` if the code was already taken
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert_if_absent(&self, new_link: NewShortLink) -> Result<bool, AppError>;

    /// Checks whether a code is already present in the store.
    ///
    /// Only an optimization for the allocation loop; holds no lock, so a
    /// `false` answer may be stale by the time the caller inserts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists(&self, code: &str) -> Result<bool, AppError>;

    /// Finds a link by its code.
    ///
    /// Expired records are returned as-is; expiry is the resolution engine's
    /// concern, not the store's.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortLink))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Atomically increments the access counter of a link by one.
    ///
    /// Executed as a single store-side update, never a read-then-write pair,
    /// so concurrent resolutions of one code cannot lose counts. Incrementing
    /// an absent code is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_access_count(&self, code: &str) -> Result<(), AppError>;
}
