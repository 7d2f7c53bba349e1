//! Repository trait for short link data access.

use crate::domain::entities::Link;
use crate::error::StoreError;
use async_trait::async_trait;

/// Repository interface for the `short -> long URL` table.
///
/// The persistent store is the sole owner of link records; implementations
/// hold no cache of them, and every call talks to the store directly.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the store cannot be reached, and
    /// [`StoreError::Statement`] if the insert fails, including the unique
    /// constraint on `short` firing because a concurrent writer claimed the
    /// same token first (detectable via
    /// [`StoreError::is_unique_violation`]).
    async fn insert(&self, link: Link) -> Result<(), StoreError>;

    /// Looks up a link by exact match on its short token.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if no row matches; a miss is not an error
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the store cannot be reached, and
    /// [`StoreError::Statement`] if the lookup fails.
    async fn find_by_short(&self, short: &str) -> Result<Option<Link>, StoreError>;
}
