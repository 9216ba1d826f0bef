//! # Shortspan
//!
//! A URL-shortening service with expiring links and access counting, built
//! with Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities, the store trait,
//!   and the clock/observer collaborators
//! - **Application Layer** ([`application`]) - The allocation and resolution
//!   engines
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite store and
//!   observability integrations
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Random 6-character shortcodes with collision retry
//! - Caller-supplied custom aliases (3-20 alphanumeric characters)
//! - Per-link validity windows, enforced on resolution
//! - Access counting with lost-update-free increments
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional; defaults shown
//! export DATABASE_URL="sqlite://shortspan.db"
//! export BASE_URL="http://localhost:3000"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{Allocation, AllocationService, ResolutionService};
    pub use crate::domain::entities::{NewShortLink, ShortLink};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
