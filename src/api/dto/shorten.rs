//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_validity() -> i64 {
    30
}

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The destination URL (must be HTTP/HTTPS; checked by the engine).
    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: String,

    /// Validity window in minutes (default 30, engine-enforced range 1-525600).
    #[serde(default = "default_validity")]
    pub validity: i64,

    /// Optional custom alias (engine-validated: 3-20 alphanumeric characters).
    pub shortcode: Option<String>,
}

/// Response for a successful shortening.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    /// Full short URL, base URL plus code.
    #[serde(rename = "shortLink")]
    pub short_link: String,

    /// Expiry instant, ISO-8601 UTC with second precision.
    pub expiry: String,
}
