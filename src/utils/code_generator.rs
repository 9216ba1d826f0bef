//! Shortcode generation and custom alias validation.
//!
//! Generation is pure and makes no store calls; collisions are possible by
//! design and are resolved by the allocation engine, never here.

use crate::error::AppError;
use rand::Rng;
use rand::distr::Alphanumeric;
use serde_json::json;

/// Length of generated shortcodes.
const CODE_LENGTH: usize = 6;

/// Minimum length of a caller-supplied custom alias.
const CUSTOM_CODE_MIN_LENGTH: usize = 3;

/// Maximum length of a caller-supplied custom alias.
const CUSTOM_CODE_MAX_LENGTH: usize = 20;

/// Generates a random 6-character shortcode.
///
/// Characters are drawn uniformly from the 62-character alphanumeric alphabet
/// (26 lowercase + 26 uppercase + 10 digits).
///
/// # Examples
///
/// ```
/// use shortspan::utils::code_generator::generate_code;
///
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Validates a caller-supplied custom alias.
///
/// # Rules
///
/// - Length: 3-20 characters
/// - Allowed characters: ASCII letters and digits
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.len() < CUSTOM_CODE_MIN_LENGTH || code.len() > CUSTOM_CODE_MAX_LENGTH {
        return Err(AppError::bad_request(
            "Shortcode must be 3-20 characters",
            json!({ "provided_length": code.len() }),
        ));
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::bad_request(
            "Shortcode must be alphanumeric",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
