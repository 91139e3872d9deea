//! Pagination error types.

use pagio_core::TokenError;

use crate::PgError;

/// Errors that can occur during a pagination operation.
///
/// The engine performs no retries and no local recovery; every collaborator
/// failure is surfaced unchanged for the caller to decide whether to retry,
/// fail the request, or fall back to the first page.
#[derive(Debug, thiserror::Error)]
#[must_use = "pagination errors should be handled appropriately"]
pub enum PageError {
    /// The requested page size violates the caller contract.
    #[error("page limit must be positive, got {0}")]
    InvalidLimit(i64),

    /// The cursor token failed to decode or authenticate.
    #[error("cursor token rejected")]
    Token(#[from] TokenError),

    /// The underlying query source failed.
    #[error(transparent)]
    Source(#[from] PgError),
}

impl PageError {
    /// Returns whether this error was caused by the caller's input rather
    /// than by the data source.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, PageError::InvalidLimit(_) | PageError::Token(_))
    }
}
