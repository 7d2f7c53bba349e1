//! Connection acquisition contract.

use crate::error::StoreError;
use async_trait::async_trait;
use sqlx::PgConnection;

/// Hands out a live connection to the backing store.
///
/// Each repository operation acquires a connection through this trait before
/// running any statement, so connection failures always surface as
/// [`StoreError::Connection`] ahead of statement execution.
///
/// The in-crate implementation,
/// [`crate::infrastructure::persistence::PgConnectionProvider`], dials a fresh
/// connection on every call. A pooling provider can implement the same trait
/// later (e.g. by detaching connections from a `PgPool`) without changing any
/// call site.
#[async_trait]
pub trait ConnectionProvider: Send + Sync {
    /// Returns a live connection, establishing it if necessary.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the store is unreachable or
    /// rejects the credentials.
    async fn acquire(&self) -> Result<PgConnection, StoreError>;
}
