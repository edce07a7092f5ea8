//! Tests for page-backed services


use std::sync::Arc;

use shared::HostMessage;
use tokio::sync::mpsc;

use crate::services::ChannelSink;
use crate::traits::PageSink;

/// Sink whose directives can be drained synchronously
pub fn recording_sink() -> (Arc<dyn PageSink>, mpsc::UnboundedReceiver<HostMessage>) {
    let (sink, receiver) = ChannelSink::channel();
    (Arc::new(sink), receiver)
}

pub fn drain(receiver: &mut mpsc::UnboundedReceiver<HostMessage>) -> Vec<HostMessage> {
    let mut messages = Vec::new();
    while let Ok(message) = receiver.try_recv() {
        messages.push(message);
    }
    messages
}
