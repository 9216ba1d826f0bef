//! Destination URL validation.

use crate::error::AppError;
use serde_json::json;

/// Validates a destination URL before allocation.
///
/// Only the scheme is checked: the destination must begin with `http://` or
/// `https://`. Anything beyond the scheme is the destination server's
/// problem, not ours.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for any other scheme or scheme-less input.
pub fn validate_destination(destination: &str) -> Result<(), AppError> {
    if !destination.starts_with("http://") && !destination.starts_with("https://") {
        return Err(AppError::bad_request(
            "Destination must start with http:// or https://",
            json!({ "destination": destination }),
        ));
    }

    Ok(())
}
