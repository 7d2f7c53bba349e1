//! Core domain entities representing the business data model.
//!
//! A single entity type lives here: [`Link`], the mapping between a short
//! token and the long URL it resolves to. The stored row has the same shape
//! as the creation input, so there is no separate `NewLink` struct.

pub mod link;

pub use link::Link;
