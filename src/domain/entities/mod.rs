//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without infrastructure concerns.
//! [`ShortLink`] is the single persistent entity of the service; [`NewShortLink`]
//! carries the fields for creating one, following the entity/new-entity split.

pub mod short_link;

pub use short_link::{NewShortLink, ShortLink};
