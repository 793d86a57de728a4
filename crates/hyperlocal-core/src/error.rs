//! Store-level error type.

use thiserror::Error;

/// A persistence failure, carrying the backend's own message.
///
/// The gateway contract makes no distinction between connectivity,
/// statement, and constraint errors: all of them surface to the handler
/// as this one type and map to a 500 response.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct RepoError(pub String);

impl RepoError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
