//! Link entity representing a short-token-to-URL mapping.

use serde::Serialize;

/// A stored short link.
///
/// `short` is the unique token identifying the record; `long_url` is the
/// original URL, stored verbatim (this crate does not validate URL
/// well-formedness). Links are created once and never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub short: String,
    pub long_url: String,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(short: impl Into<String>, long_url: impl Into<String>) -> Self {
        Self {
            short: short.into(),
            long_url: long_url.into(),
        }
    }
}
