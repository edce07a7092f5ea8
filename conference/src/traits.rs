//! Collaborator traits for dependency injection
//!
//! The conferencing widget, speech synthesis and translation live outside this
//! crate. Everything the session needs from them goes through these traits.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use shared::{WidgetEvent, WidgetEventKind};

use crate::error::ConferenceResult;
use crate::types::WidgetOptions;

/// Callback invoked for every event of the kind it was registered for
pub type EventListener = Box<dyn Fn(WidgetEvent) + Send + Sync>;

/// A live conferencing widget
#[mockall::automock]
#[async_trait]
pub trait WidgetClient: Send + Sync {
    /// Call the widget command API with positional arguments
    async fn execute_command(&self, name: &str, args: Vec<Value>) -> ConferenceResult<()>;

    /// Subscribe to one widget event kind
    fn add_listener(&self, event: WidgetEventKind, listener: EventListener);
}

/// Creates widgets on the host page
#[mockall::automock]
#[async_trait]
pub trait WidgetFactory: Send + Sync {
    /// Instantiate a widget connected to `host`
    async fn create(&self, host: &str, options: WidgetOptions) -> ConferenceResult<Arc<dyn WidgetClient>>;
}

/// Text-to-speech output
#[mockall::automock]
pub trait SpeechSynthesizer: Send + Sync {
    /// Submit a single utterance; queueing and interruption are up to the implementation
    fn speak(&self, text: &str);
}

/// Translation key lookup
#[mockall::automock]
pub trait Translator: Send + Sync {
    fn translate(&self, key: &str) -> Option<String>;

    /// Locale code currently in use
    fn locale(&self) -> String;
}
