//! mpsc-backed page sink

use shared::HostMessage;
use tokio::sync::mpsc;

use crate::error::{WebServerError, WebServerResult};
use crate::traits::PageSink;

/// Feeds the connection's outgoing task
#[derive(Clone)]
pub struct ChannelSink {
    sender: mpsc::UnboundedSender<HostMessage>,
}

impl ChannelSink {
    pub fn new(sender: mpsc::UnboundedSender<HostMessage>) -> Self {
        Self { sender }
    }

    /// Sink plus the receiver the outgoing task drains
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<HostMessage>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(sender), receiver)
    }
}

impl PageSink for ChannelSink {
    fn post(&self, message: HostMessage) -> WebServerResult<()> {
        self.sender
            .send(message)
            .map_err(|_| WebServerError::PageDisconnected)
    }
}
