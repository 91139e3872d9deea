//! Cursor token error types.

use thiserror::Error;

use crate::crypto::CryptoError;

/// Result type for cursor token operations.
pub type TokenResult<T> = std::result::Result<T, TokenError>;

/// Errors that can occur while encoding or decoding cursor tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The identifier cannot be represented as a cursor token.
    #[error("identifier must be positive, got {0}")]
    InvalidId(i64),
    /// The token is malformed, was produced under a different key, or has
    /// been tampered with.
    #[error("invalid cursor token")]
    InvalidToken,
    /// Sealing the identifier failed.
    #[error("failed to seal cursor token")]
    Seal(#[source] CryptoError),
}
