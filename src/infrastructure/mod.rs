//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and observability.
//!
//! # Modules
//!
//! - [`persistence`] - SQLite store implementation
//! - [`observability`] - `tracing`-backed engine event observer

pub mod observability;
pub mod persistence;
