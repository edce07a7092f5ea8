//! Page-backed service implementations
//!
//! Each collaborator trait of the dial pad and the conference session is
//! implemented by posting directives to the page over its bridge connection.

pub mod channel_sink;
pub mod conference_launcher;
pub mod page_speech;
pub mod page_view;
pub mod page_widget;

pub use channel_sink::ChannelSink;
pub use conference_launcher::ConferenceLauncher;
pub use page_speech::PageSpeechSynthesizer;
pub use page_view::PageView;
pub use page_widget::{PageWidgetClient, PageWidgetFactory, WidgetRegistry};

use shared::{Component, HostMessage, component_warn};

use crate::traits::PageSink;

/// Post a fire-and-forget directive; a closed page is only logged
pub(crate) fn deliver(sink: &dyn PageSink, message: HostMessage) {
    if let Err(e) = sink.post(message) {
        component_warn!(Component::Bridge, "Directive dropped: {}", e);
    }
}

#[cfg(test)]
mod tests;
