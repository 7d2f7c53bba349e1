//! Application services.

pub mod link_store;

pub use link_store::{DEFAULT_ALPHABET, DEFAULT_TOKEN_LENGTH, LinkStore, MAX_TOKEN_ATTEMPTS};
