//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod clock;
mod token_provider;

pub use clock::Clock;
pub use token_provider::AccessTokenProvider;
