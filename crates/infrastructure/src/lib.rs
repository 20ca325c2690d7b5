//! Passage Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus configuration loading.

pub mod adapters;
pub mod auth;
pub mod config;

pub use adapters::{AuthorizedClientError, AuthorizedHttpClient, ChannelNavigator, SystemClock};
pub use auth::FixedTokenProvider;
pub use config::{
    ConfigError, ConfigFormat, apply_env_overrides, apply_overrides, load_options,
    load_options_with, parse_options,
};
