//! Passage Domain - Access-token acquisition types
//!
//! This crate defines the result contract of an access-token acquisition
//! attempt. All types here are pure Rust with no I/O dependencies; the only
//! side effect, browser navigation, is an injected [`auth::Navigator`].

pub mod auth;
pub mod error;

pub use auth::{
    AccessToken, AccessTokenNotAvailable, AccessTokenRequestOptions, AcquisitionOutcome,
    AcquisitionStatus, AuthorizationOptions, Navigator, RedirectPolicy,
};
pub use error::{DomainError, DomainResult};
