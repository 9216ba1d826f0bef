//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a shortcode to its destination URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Resolution enforces the expiry predicate and bumps the access counter as
/// a side effect; the counter update is best-effort inside the engine and
/// never blocks the redirect.
///
/// # Errors
///
/// - 404 Not Found - the code never existed
/// - 410 Gone - the code existed but its validity window passed
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let destination = state.resolution_service.resolve(&code).await?;

    Ok(Redirect::temporary(&destination))
}
