//! HTTP request handlers for API endpoints.
//!
//! Handlers contain no business logic: they validate the DTO, call the
//! engine, and map the result onto the wire.

pub mod health;
pub mod redirect;
pub mod shorten;

pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
