//! Repository trait definitions for the domain layer.
//!
//! This module defines the store interface that abstracts data access
//! operations following the Repository pattern. The trait is implemented by
//! the SQLite store in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Testing
//!
//! See integration tests in `tests/store_sqlite.rs` for usage examples.

pub mod link_store;

pub use link_store::LinkStore;

#[cfg(test)]
pub use link_store::MockLinkStore;
