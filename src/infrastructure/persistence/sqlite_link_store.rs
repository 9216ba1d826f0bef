//! SQLite implementation of the link store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkStore;
use crate::error::AppError;

/// SQLite-backed store for the `short_links` table.
///
/// Both mutating operations are single statements, so their atomicity comes
/// straight from the database: the conditional insert relies on the primary
/// key constraint and the counter update is one read-modify-write inside
/// SQLite.
pub struct SqliteLinkStore {
    pool: SqlitePool,
}

impl SqliteLinkStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkStore for SqliteLinkStore {
    async fn insert_if_absent(&self, new_link: NewShortLink) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO short_links (code, destination, expires_at)
            VALUES (?, ?, ?)
            ON CONFLICT(code) DO NOTHING
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.destination)
        .bind(new_link.expires_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn exists(&self, code: &str) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM short_links WHERE code = ?)")
                .bind(code)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT code, destination, expires_at, access_count
            FROM short_links
            WHERE code = ?
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| {
            let expires_at: DateTime<Utc> = r.try_get("expires_at")?;
            Ok(ShortLink::new(
                r.try_get("code")?,
                r.try_get("destination")?,
                expires_at,
                r.try_get("access_count")?,
            ))
        })
        .transpose()
        .map_err(|e: sqlx::Error| e.into())
    }

    async fn increment_access_count(&self, code: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE short_links SET access_count = access_count + 1 WHERE code = ?")
            .bind(code)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
