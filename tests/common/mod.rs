#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use sqlx::SqlitePool;

use shortspan::application::services::{AllocationService, ResolutionService};
use shortspan::domain::clock::{Clock, SystemClock};
use shortspan::domain::observer::NullObserver;
use shortspan::infrastructure::persistence::SqliteLinkStore;
use shortspan::state::AppState;

/// Builds an [`AppState`] backed by the given pool, with the system clock
/// and a no-op observer.
pub fn create_test_state(pool: SqlitePool) -> AppState {
    let store = Arc::new(SqliteLinkStore::new(pool.clone()));
    let clock = Arc::new(SystemClock::new());
    let observer = Arc::new(NullObserver::new());

    let allocation_service = Arc::new(AllocationService::new(
        store.clone(),
        clock.clone(),
        observer.clone(),
    ));
    let resolution_service = Arc::new(ResolutionService::new(store, clock, observer));

    AppState {
        allocation_service,
        resolution_service,
        db: pool,
        base_url: "http://localhost:3000".to_string(),
    }
}

pub async fn insert_link(
    pool: &SqlitePool,
    code: &str,
    destination: &str,
    expires_at: DateTime<Utc>,
) {
    sqlx::query("INSERT INTO short_links (code, destination, expires_at) VALUES (?, ?, ?)")
        .bind(code)
        .bind(destination)
        .bind(expires_at)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_live_link(pool: &SqlitePool, code: &str, destination: &str) {
    insert_link(pool, code, destination, Utc::now() + Duration::hours(1)).await;
}

pub async fn create_expired_link(pool: &SqlitePool, code: &str, destination: &str) {
    insert_link(pool, code, destination, Utc::now() - Duration::hours(1)).await;
}

pub async fn access_count(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT access_count FROM short_links WHERE code = ?")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn link_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM short_links")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Settable clock for driving expiry in tests without sleeping.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
