//! Conferencing widget living in the page
//!
//! Creation and commands become directives; events reported by the page are
//! fanned out to the listeners registered through [`WidgetRegistry`].

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use conference::{ConferenceError, ConferenceResult, EventListener, WidgetClient, WidgetFactory, WidgetOptions};
use serde_json::Value;
use shared::{Component, HostMessage, WidgetEvent, WidgetEventKind, component_debug};

use crate::traits::PageSink;

/// Listeners per widget event kind
#[derive(Default)]
pub struct WidgetRegistry {
    listeners: RwLock<HashMap<WidgetEventKind, Vec<EventListener>>>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, kind: WidgetEventKind, listener: EventListener) {
        self.listeners
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .entry(kind)
            .or_default()
            .push(listener);
    }

    /// Invoke every listener registered for the event's kind; returns how many ran
    pub fn dispatch(&self, event: &WidgetEvent) -> usize {
        let listeners = self.listeners.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        let Some(registered) = listeners.get(&event.kind()) else {
            component_debug!(Component::Bridge, "No listener for {}", event.kind());
            return 0;
        };

        for listener in registered {
            listener(event.clone());
        }
        registered.len()
    }

    pub fn listener_count(&self, kind: WidgetEventKind) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&kind)
            .map_or(0, Vec::len)
    }
}

/// Handle on the widget instance created by the page
pub struct PageWidgetClient {
    sink: Arc<dyn PageSink>,
    registry: Arc<WidgetRegistry>,
}

#[async_trait]
impl WidgetClient for PageWidgetClient {
    async fn execute_command(&self, name: &str, args: Vec<Value>) -> ConferenceResult<()> {
        self.sink
            .post(HostMessage::WidgetCommand {
                name: name.to_string(),
                args,
            })
            .map_err(|e| ConferenceError::Bridge { message: e.to_string() })
    }

    fn add_listener(&self, event: WidgetEventKind, listener: EventListener) {
        self.registry.add(event, listener);
    }
}

/// Asks the page to instantiate the widget
pub struct PageWidgetFactory {
    sink: Arc<dyn PageSink>,
    registry: Arc<WidgetRegistry>,
}

impl PageWidgetFactory {
    pub fn new(sink: Arc<dyn PageSink>, registry: Arc<WidgetRegistry>) -> Self {
        Self { sink, registry }
    }
}

#[async_trait]
impl WidgetFactory for PageWidgetFactory {
    async fn create(&self, host: &str, options: WidgetOptions) -> ConferenceResult<Arc<dyn WidgetClient>> {
        let options = serde_json::to_value(&options)?;

        self.sink
            .post(HostMessage::CreateWidget {
                host: host.to_string(),
                options,
            })
            .map_err(|e| ConferenceError::WidgetCreation { message: e.to_string() })?;

        Ok(Arc::new(PageWidgetClient {
            sink: Arc::clone(&self.sink),
            registry: Arc::clone(&self.registry),
        }))
    }
}
