//! Application error types

use passage_domain::{AccessTokenNotAvailable, DomainError};
use thiserror::Error;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// A request could not be authorized.
    #[error(transparent)]
    Authorization(#[from] AuthorizationError),
}

/// Errors raised while attaching a token to a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthorizationError {
    /// The provider could not produce a token. The caller may redirect with
    /// [`AccessTokenNotAvailable::redirect`].
    #[error(transparent)]
    TokenNotAvailable(#[from] AccessTokenNotAvailable),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
