//! Utility functions shared across the application.
//!
//! - [`code_generator`] - Shortcode generation and custom alias validation
//! - [`destination`] - Destination URL validation

pub mod code_generator;
pub mod destination;
