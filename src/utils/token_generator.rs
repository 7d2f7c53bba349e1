//! Token candidate drawing.
//!
//! A candidate is the prefix of a uniformly random permutation of the
//! alphabet's characters: shuffle, take the first `length`. The shuffle uses
//! the thread-local RNG; no seeding, no determinism across calls.
//!
//! Uniqueness against the store is not this module's concern; the service
//! layer probes each candidate and redraws on collision.

use rand::rng;
use rand::seq::SliceRandom;

use crate::error::StoreError;

/// Draws one token candidate of exactly `length` characters from `alphabet`.
///
/// Because a candidate is a permutation prefix, each alphabet character is
/// used at most as often as it appears in `alphabet`.
///
/// # Errors
///
/// Returns [`StoreError::InvalidTokenRequest`] when `length` is zero or
/// exceeds the number of characters in `alphabet`; no permutation prefix of
/// the requested length exists in either case.
pub fn draw_candidate(alphabet: &str, length: usize) -> Result<String, StoreError> {
    if length == 0 {
        return Err(StoreError::InvalidTokenRequest {
            reason: "token length must be at least 1".to_string(),
        });
    }

    let mut chars: Vec<char> = alphabet.chars().collect();

    if chars.len() < length {
        return Err(StoreError::InvalidTokenRequest {
            reason: format!(
                "token length {} exceeds the {}-character alphabet",
                length,
                chars.len()
            ),
        });
    }

    chars.shuffle(&mut rng());
    chars.truncate(length);

    Ok(chars.into_iter().collect())
}
