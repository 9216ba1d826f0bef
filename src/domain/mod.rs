//! Domain layer containing business entities and engine collaborators.
//!
//! This module implements the core domain model following Clean Architecture
//! principles. It defines entities, the store trait, and the collaborators the
//! engines depend on, independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`clock`] - Time source abstraction for expiry computation
//! - [`observer`] - Structured event sink for engine outcomes
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - The store trait defines the contract implemented by the infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod clock;
pub mod entities;
pub mod observer;
pub mod repositories;
