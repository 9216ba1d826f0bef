//! Shared application state injected into all handlers.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::application::services::{AllocationService, ResolutionService};
use crate::domain::clock::SystemClock;
use crate::infrastructure::persistence::SqliteLinkStore;

/// Application state shared across request handlers.
#[derive(Clone)]
pub struct AppState {
    pub allocation_service: Arc<AllocationService<SqliteLinkStore, SystemClock>>,
    pub resolution_service: Arc<ResolutionService<SqliteLinkStore, SystemClock>>,
    /// Pool handle kept for the health check's liveness query.
    pub db: SqlitePool,
    /// Base URL prefixed to shortcodes in responses, e.g. `http://localhost:3000`.
    pub base_url: String,
}
