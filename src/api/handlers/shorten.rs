//! Handler for the link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/page",
///   "validity": 30,          // optional, minutes
///   "shortcode": "promo1"    // optional custom alias
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "shortLink": "http://localhost:3000/promo1",
///   "expiry": "2026-08-21T12:30:00Z"
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request - malformed URL, validity out of range, bad alias
/// - 409 Conflict - custom alias already taken
/// - 500 Internal Server Error - code generation exhausted or store failure
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let allocation = state
        .allocation_service
        .allocate(payload.url, payload.validity, payload.shortcode)
        .await?;

    let short_link = format!(
        "{}/{}",
        state.base_url.trim_end_matches('/'),
        allocation.code
    );

    Ok(Json(ShortenResponse {
        short_link,
        expiry: allocation
            .expires_at
            .format("%Y-%m-%dT%H:%M:%SZ")
            .to_string(),
    }))
}
