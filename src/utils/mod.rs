//! Utility functions shared across the crate.
//!
//! - [`token_generator`] - Shuffle-based token candidate drawing

pub mod token_generator;
