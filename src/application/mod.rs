//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating store calls,
//! validation, and business rules. Services consume the store trait and
//! provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::allocation_service::AllocationService`] - Shortcode allocation
//! - [`services::resolution_service::ResolutionService`] - Shortcode resolution

pub mod services;
