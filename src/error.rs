//! Error taxonomy for store operations.
//!
//! Every public operation fails with a [`StoreError`]. The two database-facing
//! variants mirror the two phases of an operation: [`StoreError::Connection`]
//! is raised while dialing the store, before any statement runs, and
//! [`StoreError::Statement`] once a statement could not be prepared, bound, or
//! executed over an established connection. Neither is retried internally.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store is unreachable or rejected the credentials.
    #[error("could not connect to the link store: {0}")]
    Connection(#[source] sqlx::Error),

    /// A statement failed to prepare, bind, or execute after a successful
    /// connect. Includes unique-constraint conflicts from a lost
    /// check-then-insert race; see [`StoreError::is_unique_violation`].
    #[error("statement failed against the link store: {0}")]
    Statement(#[source] sqlx::Error),

    /// Token generation gave up after `attempts` draws without finding a free
    /// token for the given alphabet and length.
    #[error(
        "token space exhausted after {attempts} attempts \
         (length {length} over a {alphabet_len}-character alphabet)"
    )]
    TokenSpaceExhausted {
        attempts: usize,
        alphabet_len: usize,
        length: usize,
    },

    /// The requested alphabet/length pair cannot produce a full-length token.
    #[error("invalid token request: {reason}")]
    InvalidTokenRequest { reason: String },
}

impl StoreError {
    /// Returns true if this is a statement failure caused by a unique
    /// constraint, i.e. another writer claimed the same token between the
    /// existence check and the insert. Callers that want to retry the whole
    /// `create` on that race can branch on this without digging through
    /// sqlx internals.
    pub fn is_unique_violation(&self) -> bool {
        let StoreError::Statement(e) = self else {
            return false;
        };

        e.as_database_error()
            .is_some_and(|db| db.is_unique_violation())
    }
}

/// Maps a connect-phase sqlx error.
pub(crate) fn connect_error(e: sqlx::Error) -> StoreError {
    StoreError::Connection(e)
}

/// Maps a statement-phase sqlx error.
pub(crate) fn statement_error(e: sqlx::Error) -> StoreError {
    StoreError::Statement(e)
}
