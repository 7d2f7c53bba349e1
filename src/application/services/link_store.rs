//! Link creation, resolution, and unique token generation.

use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::StoreError;
use crate::utils::token_generator::draw_candidate;

/// The 62 alphanumeric characters used for tokens by default.
pub const DEFAULT_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Default token length. 62^5 gives roughly 916 million possible tokens.
pub const DEFAULT_TOKEN_LENGTH: usize = 5;

/// Upper bound on candidate draws per token before giving up with
/// [`StoreError::TokenSpaceExhausted`].
pub const MAX_TOKEN_ATTEMPTS: usize = 32;

/// Service mediating all reads and writes of the short-to-URL table.
///
/// Holds no state beyond the repository handle; every operation is
/// self-contained and talks to the store directly.
///
/// # Concurrency
///
/// Token generation checks for an existing row, then `create` inserts; the
/// two steps are not atomic. The table's unique constraint on `short` is the
/// backstop: if a concurrent caller claims the same token in between, the
/// insert fails with a [`StoreError::Statement`] whose
/// [`is_unique_violation`](StoreError::is_unique_violation) is true. That
/// race is surfaced to the caller rather than retried here.
pub struct LinkStore<R: LinkRepository> {
    repository: Arc<R>,
}

impl<R: LinkRepository> LinkStore<R> {
    /// Creates a new link store over a repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Shortens a URL: generates a free token, persists the mapping, and
    /// returns the token.
    ///
    /// The URL is stored verbatim; this core does not validate it. The record
    /// is durably persisted before the token is returned.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Connection`] if the store is unreachable
    /// - [`StoreError::Statement`] if the insert fails, including a lost
    ///   token race (see the type-level concurrency note)
    /// - [`StoreError::TokenSpaceExhausted`] if no free token was found
    ///   within [`MAX_TOKEN_ATTEMPTS`] draws
    pub async fn create(&self, long_url: String) -> Result<String, StoreError> {
        let short = self.generate_unique_token().await?;

        self.repository
            .insert(Link::new(short.clone(), long_url))
            .await?;

        Ok(short)
    }

    /// Resolves a short token back to its long URL.
    ///
    /// A miss returns `Ok(None)` and is not an error. `Some("")` is a real
    /// result: a stored empty-string URL is distinguishable from absence.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Connection`] if the store is unreachable
    /// - [`StoreError::Statement`] if the lookup fails
    pub async fn resolve(&self, short: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .repository
            .find_by_short(short)
            .await?
            .map(|link| link.long_url))
    }

    /// Generates a token not currently present in the store, using the
    /// default alphabet and length.
    pub async fn generate_unique_token(&self) -> Result<String, StoreError> {
        self.generate_unique_token_with(DEFAULT_ALPHABET, DEFAULT_TOKEN_LENGTH)
            .await
    }

    /// Generates a token not currently present in the store.
    ///
    /// Each attempt draws a fresh permutation prefix of `alphabet` and probes
    /// the store for it; the first free candidate wins. The check is
    /// best-effort, see the type-level concurrency note.
    ///
    /// # Errors
    ///
    /// - [`StoreError::InvalidTokenRequest`] for a zero `length` or one
    ///   exceeding the alphabet size
    /// - [`StoreError::TokenSpaceExhausted`] after [`MAX_TOKEN_ATTEMPTS`]
    ///   colliding draws
    /// - [`StoreError::Connection`] / [`StoreError::Statement`] from the
    ///   underlying existence probes
    pub async fn generate_unique_token_with(
        &self,
        alphabet: &str,
        length: usize,
    ) -> Result<String, StoreError> {
        for attempt in 1..=MAX_TOKEN_ATTEMPTS {
            let candidate = draw_candidate(alphabet, length)?;

            if self.repository.find_by_short(&candidate).await?.is_none() {
                return Ok(candidate);
            }

            tracing::debug!(attempt, %candidate, "token collision, drawing again");
        }

        tracing::warn!(
            attempts = MAX_TOKEN_ATTEMPTS,
            length,
            "token space appears saturated"
        );

        Err(StoreError::TokenSpaceExhausted {
            attempts: MAX_TOKEN_ATTEMPTS,
            alphabet_len: alphabet.chars().count(),
            length,
        })
    }
}
