//! Navigator that hands navigation intents to the hosting shell.
//!
//! The shell owns the browsing context and drains the receiver; this side
//! never waits for the navigation to happen.

use passage_domain::Navigator;
use tokio::sync::mpsc;

/// Sends each navigation target over an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    sender: mpsc::UnboundedSender<String>,
}

impl ChannelNavigator {
    /// Creates a navigator and the receiver the shell should drain.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    /// Wraps an existing sender.
    #[must_use]
    pub const fn from_sender(sender: mpsc::UnboundedSender<String>) -> Self {
        Self { sender }
    }
}

impl Navigator for ChannelNavigator {
    fn navigate_to(&self, url: &str) {
        if self.sender.send(url.to_string()).is_err() {
            tracing::warn!(url, "navigation receiver closed, dropping navigation");
        }
    }
}
