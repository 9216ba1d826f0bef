//! HTTP server initialization and runtime setup.
//!
//! Handles database connection, migrations, engine wiring, and the Axum
//! server lifecycle.

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::application::services::{AllocationService, ResolutionService};
use crate::config::Config;
use crate::domain::clock::SystemClock;
use crate::infrastructure::observability::TracingObserver;
use crate::infrastructure::persistence::SqliteLinkStore;
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (creating the database file if missing)
/// - Embedded migrations
/// - Allocation and resolution engines with their collaborators
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .context("Invalid DATABASE_URL")?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let store = Arc::new(SqliteLinkStore::new(pool.clone()));
    let clock = Arc::new(SystemClock::new());
    let observer = Arc::new(TracingObserver::new());

    let allocation_service = Arc::new(AllocationService::new(
        store.clone(),
        clock.clone(),
        observer.clone(),
    ));
    let resolution_service = Arc::new(ResolutionService::new(store, clock, observer));

    let state = AppState {
        allocation_service,
        resolution_service,
        db: pool,
        base_url: config.base_url,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl-C handler: {e}");
    }
    tracing::info!("Shutdown signal received");
}
