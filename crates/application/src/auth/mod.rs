//! Authorization of outgoing API requests.
//!
//! This module provides:
//! - Selection of the requests that must carry a token
//! - Reuse of the last acquired token until it nears expiry

mod authorizer;

pub use authorizer::RequestAuthorizer;
