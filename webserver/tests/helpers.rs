//! Test helper utilities for webserver integration tests

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use shared::{Configuration, HostMessage};
use tokio::sync::mpsc;
use webserver::{ChannelSink, PageController};

/// Controller wired to a channel the test reads from
pub struct ControllerHarness {
    pub controller: PageController,
    pub outgoing: mpsc::UnboundedReceiver<HostMessage>,
}

impl ControllerHarness {
    pub fn new(config: Configuration) -> Self {
        let (sink, outgoing) = ChannelSink::channel();
        let controller = PageController::new(Arc::new(config), Arc::new(sink)).unwrap();
        Self { controller, outgoing }
    }

    /// Directives already queued
    pub fn drain(&mut self) -> Vec<HostMessage> {
        let mut messages = Vec::new();
        while let Ok(message) = self.outgoing.try_recv() {
            messages.push(message);
        }
        messages
    }

    /// Wait for the first directive matching `predicate`, collecting everything before it
    pub async fn wait_for<F>(&mut self, predicate: F, timeout_ms: u64) -> Option<Vec<HostMessage>>
    where
        F: Fn(&HostMessage) -> bool,
    {
        let mut seen = Vec::new();
        let deadline = tokio::time::Instant::now() + Duration::from_millis(timeout_ms);

        loop {
            let message = tokio::time::timeout_at(deadline, self.outgoing.recv()).await.ok()??;
            let done = predicate(&message);
            seen.push(message);
            if done {
                return Some(seen);
            }
        }
    }
}

pub fn is_speech(message: &HostMessage) -> bool {
    matches!(message, HostMessage::Speak { .. })
}

pub fn spoken(messages: &[HostMessage]) -> Vec<String> {
    messages
        .iter()
        .filter_map(|message| match message {
            HostMessage::Speak { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect()
}
