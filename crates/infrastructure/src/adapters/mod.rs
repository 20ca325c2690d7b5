//! Adapters implementing application ports and domain capabilities.

mod authorized_client;
mod channel_navigator;
mod system_clock;

pub use authorized_client::{AuthorizedClientError, AuthorizedHttpClient};
pub use channel_navigator::ChannelNavigator;
pub use system_clock::SystemClock;
