//! Passage Application - Token acquisition orchestration
//!
//! This crate sits between callers and the token provider: it defines the
//! provider and clock ports, the acquire-token use case and the authorizer
//! that attaches tokens to outgoing API requests.

pub mod auth;
pub mod error;
pub mod ports;
pub mod use_cases;

pub use auth::RequestAuthorizer;
pub use error::{ApplicationError, ApplicationResult, AuthorizationError};
pub use ports::{AccessTokenProvider, Clock};
pub use use_cases::{AcquireToken, AcquireTokenInput, AcquireTokenOutput};
