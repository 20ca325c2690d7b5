//! Application use cases (business logic orchestration).

mod acquire_token;

pub use acquire_token::*;
