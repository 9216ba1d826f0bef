//! SQLite store implementation.
//!
//! Concrete implementation of the domain store trait using SQLx.
//!
//! # Stores
//!
//! - [`SqliteLinkStore`] - Short link storage, lookup, and access counting

pub mod sqlite_link_store;

pub use sqlite_link_store::SqliteLinkStore;
