//! Per-page composition root
//!
//! One controller per bridge connection. It wires the page-backed services into
//! a [`PageSession`] and, when the IVR is enabled, a [`PageDialPad`], then routes
//! every page message to them.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use conference::{CommandOutcome, ConferenceSession, LocaleCatalog};
use ivr::{DialPad, HttpRoomResolver, Key, KeyAction, SessionLauncher};
use shared::{
    Component, Configuration, ErrorReason, HostMessage, MenuVisibility, PageMessage, RoomId, UiElement,
    WidgetContainer, component_debug, component_error, component_info, component_warn,
};

use crate::error::{WebServerError, WebServerResult};
use crate::services::{
    ConferenceLauncher, PageSpeechSynthesizer, PageView, PageWidgetFactory, WidgetRegistry, deliver,
};
use crate::traits::PageSink;
use crate::types::{PageDialPad, PageSession};

pub struct PageController {
    config: Arc<Configuration>,
    sink: Arc<dyn PageSink>,
    registry: Arc<WidgetRegistry>,
    session: Arc<PageSession>,
    launcher: Arc<ConferenceLauncher>,
    dial_pad: Option<Arc<PageDialPad>>,
    container: Arc<RwLock<WidgetContainer>>,
    initialized: AtomicBool,
}

impl PageController {
    pub fn new(config: Arc<Configuration>, sink: Arc<dyn PageSink>) -> WebServerResult<Self> {
        let registry = Arc::new(WidgetRegistry::new());
        let container = Arc::new(RwLock::new(WidgetContainer::default()));

        let session = Arc::new(ConferenceSession::new(
            Arc::clone(&config),
            PageWidgetFactory::new(Arc::clone(&sink), Arc::clone(&registry)),
            PageSpeechSynthesizer::new(Arc::clone(&sink), config.lang.clone()),
            LocaleCatalog::bundled()?,
        ));

        let launcher = || {
            ConferenceLauncher::new(Arc::clone(&session), Arc::clone(&container), Arc::clone(&sink))
        };

        let dial_pad = config.ivr.enabled.then(|| {
            let view = PageView::new(Arc::clone(&sink));
            Arc::new(DialPad::new(
                Arc::clone(&config),
                HttpRoomResolver::from_config(&config.ivr),
                view.clone(),
                view,
                launcher(),
            ))
        });
        let launcher = Arc::new(launcher());

        Ok(Self {
            config,
            sink,
            registry,
            session,
            launcher,
            dial_pad,
            container,
            initialized: AtomicBool::new(false),
        })
    }

    pub fn session(&self) -> &Arc<PageSession> {
        &self.session
    }

    pub fn dial_pad(&self) -> Option<&Arc<PageDialPad>> {
        self.dial_pad.as_ref()
    }

    pub fn registry(&self) -> &Arc<WidgetRegistry> {
        &self.registry
    }

    /// Start the page: direct room when `room_id` is given, dial pad otherwise
    ///
    /// Runs once per controller. Without a room and without IVR the page gets a
    /// `missing_room_id` error and the connection is not usable.
    pub async fn initialize(&self, room_id: Option<String>) -> WebServerResult<()> {
        if self.initialized.swap(true, Ordering::SeqCst) {
            return Err(WebServerError::AlreadyInitialized);
        }

        if let Some(lang) = &self.config.lang {
            // Unknown locales are logged by the catalog; the fallback stays active
            let _ = self.session.translator().change_locale(lang);
        }

        match (room_id, &self.dial_pad) {
            (Some(room_id), _) => {
                let room = RoomId::new(room_id)?;
                component_info!(Component::Bridge, "🚪 Direct entry into room {}", room);
                self.launcher.launch(room).await?;
            }
            (None, Some(dial_pad)) => dial_pad.attach(),
            (None, None) => {
                component_error!(Component::Bridge, "❌ {}", WebServerError::MissingRoomId);
                deliver(
                    self.sink.as_ref(),
                    HostMessage::RenderError {
                        reason: ErrorReason::MissingRoomId,
                    },
                );
                return Err(WebServerError::MissingRoomId);
            }
        }

        Ok(())
    }

    /// Route one page message
    pub async fn handle(&self, message: PageMessage) -> WebServerResult<()> {
        match message {
            PageMessage::Key { key } => self.on_key(Key::parse(&key)).await,
            PageMessage::EnterRoom => {
                self.spawn_enter_room();
                Ok(())
            }
            PageMessage::Command { name, args } => {
                if let CommandOutcome::MenuToggled(visibility) = self.session.execute_command(&name, args).await {
                    let directive = match visibility {
                        MenuVisibility::Shown => HostMessage::show(UiElement::DtmfMenu),
                        MenuVisibility::Hidden => HostMessage::hide(UiElement::DtmfMenu),
                    };
                    self.sink.post(directive)?;
                }
                Ok(())
            }
            PageMessage::WidgetEvent(event) => {
                self.registry.dispatch(&event);
                Ok(())
            }
            PageMessage::Container(container) => {
                component_debug!(Component::Bridge, "Widget container {:?}", container);
                *self.container.write().unwrap_or_else(|poisoned| poisoned.into_inner()) = container;
                Ok(())
            }
        }
    }

    async fn on_key(&self, key: Key) -> WebServerResult<()> {
        let Some(dial_pad) = &self.dial_pad else {
            component_debug!(Component::Bridge, "Key {} ignored, IVR disabled", key);
            return Ok(());
        };

        // Resolution runs off the message loop so keys keep flowing
        if KeyAction::classify(&key) == KeyAction::EnterRoom {
            self.spawn_enter_room();
            return Ok(());
        }

        dial_pad.on_key(key).await?;
        Ok(())
    }

    fn spawn_enter_room(&self) {
        let Some(dial_pad) = &self.dial_pad else {
            component_warn!(Component::Bridge, "Enter room ignored, IVR disabled");
            return;
        };

        let dial_pad = Arc::clone(dial_pad);
        tokio::spawn(async move {
            // Failures are rendered and logged by the dial pad
            let _ = dial_pad.enter_room().await;
        });
    }
}
