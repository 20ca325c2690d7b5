//! Token provider implementations.

mod fixed_token_provider;

pub use fixed_token_provider::FixedTokenProvider;
