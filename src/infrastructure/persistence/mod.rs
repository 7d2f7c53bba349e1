//! PostgreSQL implementations of the domain contracts.
//!
//! - [`PgConnectionProvider`] - Dials a fresh connection per operation
//! - [`PgLinkRepository`] - Link storage and retrieval over any
//!   [`crate::domain::connection::ConnectionProvider`]

pub mod pg_connection;
pub mod pg_link_repository;

pub use pg_connection::PgConnectionProvider;
pub use pg_link_repository::PgLinkRepository;
