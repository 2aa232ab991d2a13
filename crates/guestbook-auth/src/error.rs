//! Error types for identity delegation.

use thiserror::Error;

/// Result type alias for auth operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Errors that can occur while resolving the caller's auth context.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing required security ticket header")]
    MissingTicket,
}
