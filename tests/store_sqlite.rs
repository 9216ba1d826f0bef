mod common;

use std::sync::Arc;

use chrono::{Duration, Utc};
use sqlx::SqlitePool;

use shortspan::domain::entities::NewShortLink;
use shortspan::domain::repositories::LinkStore;
use shortspan::infrastructure::persistence::SqliteLinkStore;

fn new_link(code: &str, destination: &str) -> NewShortLink {
    NewShortLink {
        code: code.to_string(),
        destination: destination.to_string(),
        expires_at: Utc::now() + Duration::minutes(30),
    }
}

#[sqlx::test]
async fn test_insert_if_absent_inserts_new_code(pool: SqlitePool) {
    let store = SqliteLinkStore::new(pool.clone());

    let inserted = store
        .insert_if_absent(new_link("abc123", "https://example.com"))
        .await
        .unwrap();

    assert!(inserted);
    assert_eq!(common::access_count(&pool, "abc123").await, 0);
}

#[sqlx::test]
async fn test_insert_if_absent_rejects_duplicate(pool: SqlitePool) {
    let store = SqliteLinkStore::new(pool.clone());

    let first = store
        .insert_if_absent(new_link("abc123", "https://first.com"))
        .await
        .unwrap();
    let second = store
        .insert_if_absent(new_link("abc123", "https://second.com"))
        .await
        .unwrap();

    assert!(first);
    assert!(!second);

    // Reject-on-conflict, never overwrite.
    let link = store.find_by_code("abc123").await.unwrap().unwrap();
    assert_eq!(link.destination, "https://first.com");
}

#[sqlx::test]
async fn test_exists(pool: SqlitePool) {
    let store = SqliteLinkStore::new(pool.clone());
    common::create_live_link(&pool, "abc123", "https://example.com").await;

    assert!(store.exists("abc123").await.unwrap());
    assert!(!store.exists("nosuch").await.unwrap());
}

#[sqlx::test]
async fn test_find_by_code_roundtrip(pool: SqlitePool) {
    let store = SqliteLinkStore::new(pool.clone());
    let expires_at = Utc::now() + Duration::minutes(5);

    store
        .insert_if_absent(NewShortLink {
            code: "xyz789".to_string(),
            destination: "https://rust-lang.org".to_string(),
            expires_at,
        })
        .await
        .unwrap();

    let link = store.find_by_code("xyz789").await.unwrap().unwrap();

    assert_eq!(link.code, "xyz789");
    assert_eq!(link.destination, "https://rust-lang.org");
    assert_eq!(link.expires_at.timestamp(), expires_at.timestamp());
    assert_eq!(link.access_count, 0);
}

#[sqlx::test]
async fn test_find_by_code_returns_expired_records(pool: SqlitePool) {
    let store = SqliteLinkStore::new(pool.clone());
    common::create_expired_link(&pool, "old123", "https://example.com").await;

    // Expiry is the resolution engine's concern; the store returns the row.
    let link = store.find_by_code("old123").await.unwrap();
    assert!(link.is_some());
}

#[sqlx::test]
async fn test_find_by_code_not_found(pool: SqlitePool) {
    let store = SqliteLinkStore::new(pool);

    let link = store.find_by_code("nosuch").await.unwrap();
    assert!(link.is_none());
}

#[sqlx::test]
async fn test_increment_access_count(pool: SqlitePool) {
    let store = SqliteLinkStore::new(pool.clone());
    common::create_live_link(&pool, "abc123", "https://example.com").await;

    store.increment_access_count("abc123").await.unwrap();
    store.increment_access_count("abc123").await.unwrap();

    assert_eq!(common::access_count(&pool, "abc123").await, 2);
}

#[sqlx::test]
async fn test_increment_absent_code_is_noop(pool: SqlitePool) {
    let store = SqliteLinkStore::new(pool.clone());

    store.increment_access_count("nosuch").await.unwrap();

    assert_eq!(common::link_count(&pool).await, 0);
}

#[sqlx::test]
async fn test_concurrent_inserts_single_winner(pool: SqlitePool) {
    let store = Arc::new(SqliteLinkStore::new(pool));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store
                .insert_if_absent(new_link("raced1", "https://example.com"))
                .await
                .unwrap()
        }));
    }

    let mut winners = 0;
    for handle in handles {
        if handle.await.unwrap() {
            winners += 1;
        }
    }

    assert_eq!(winners, 1);
}

#[sqlx::test]
async fn test_concurrent_increments_lose_no_updates(pool: SqlitePool) {
    let store = Arc::new(SqliteLinkStore::new(pool.clone()));
    common::create_live_link(&pool, "abc123", "https://example.com").await;

    let mut handles = Vec::new();
    for _ in 0..20 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.increment_access_count("abc123").await.unwrap();
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(common::access_count(&pool, "abc123").await, 20);
}
