//! Conference session
//!
//! One session owns at most one widget. Commands are accepted as soon as the
//! session exists; widget events only turn into spoken feedback once the
//! listeners are armed, which happens after a settling period so the widget's
//! own start-up state changes are not announced.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, OnceLock, Weak};

use serde_json::Value;
use shared::{
    CommandName, Component, Configuration, ListenerArming, MenuVisibility, RoomId, WidgetContainer, WidgetEvent,
    WidgetEventKind, component_debug, component_error, component_info, component_warn,
};
use tokio::sync::oneshot;

use crate::error::{ConferenceError, ConferenceResult};
use crate::feedback;
use crate::traits::{SpeechSynthesizer, Translator, WidgetClient, WidgetFactory};
use crate::types::{CommandOutcome, SessionLifecycle, WidgetOptions, WidgetOverrides, connection_host};

/// State shared with the arming task and the widget listeners
struct SessionCore<S, T> {
    config: Arc<Configuration>,
    speech: S,
    translator: T,
    menu_shown: AtomicBool,
    lifecycle: Mutex<SessionLifecycle>,
    room: OnceLock<RoomId>,
    widget: OnceLock<Arc<dyn WidgetClient>>,
}

/// Conference session with injected collaborators
pub struct ConferenceSession<F, S, T>
where
    F: WidgetFactory,
    S: SpeechSynthesizer + 'static,
    T: Translator + 'static,
{
    core: Arc<SessionCore<S, T>>,
    factory: F,
}

impl<F, S, T> ConferenceSession<F, S, T>
where
    F: WidgetFactory,
    S: SpeechSynthesizer + 'static,
    T: Translator + 'static,
{
    /// Create a session over an already loaded configuration
    pub fn new(config: Arc<Configuration>, factory: F, speech: S, translator: T) -> Self {
        let mut lifecycle = SessionLifecycle::default();
        lifecycle.advance_to(SessionLifecycle::ConfigLoaded);

        Self {
            core: Arc::new(SessionCore {
                config,
                speech,
                translator,
                menu_shown: AtomicBool::new(false),
                lifecycle: Mutex::new(lifecycle),
                room: OnceLock::new(),
                widget: OnceLock::new(),
            }),
            factory,
        }
    }

    pub fn lifecycle(&self) -> SessionLifecycle {
        self.core.lifecycle()
    }

    pub fn room(&self) -> Option<&RoomId> {
        self.core.room.get()
    }

    pub fn menu_visibility(&self) -> MenuVisibility {
        self.core.menu_visibility()
    }

    pub fn translator(&self) -> &T {
        &self.core.translator
    }

    /// Create the widget for `room` and schedule listener arming
    pub async fn create_widget(
        &self,
        room: RoomId,
        container: &WidgetContainer,
        overrides: WidgetOverrides,
    ) -> ConferenceResult<()> {
        if self.core.widget.get().is_some() {
            return Err(self.core.already_created());
        }

        let host = connection_host(&self.core.config.domain);
        let options = WidgetOptions::new(&room, container, overrides);

        component_info!(Component::Conference, "🎥 Creating widget for room {} on {}", room, host);

        let widget = self.factory.create(host, options).await.inspect_err(|e| {
            component_error!(Component::Conference, "❌ Widget creation failed for room {}: {}", room, e);
        })?;

        // The widget is the creation guard; a failed factory call leaves the session untouched
        if self.core.widget.set(Arc::clone(&widget)).is_err() {
            return Err(self.core.already_created());
        }
        let _ = self.core.room.set(room);
        self.core.transition(SessionLifecycle::WidgetCreated);

        SessionCore::schedule_arming(&self.core, widget);
        Ok(())
    }

    /// Dispatch a command by its external name
    ///
    /// Unknown names are logged and dropped; nothing is propagated to the caller.
    pub async fn execute_command(&self, name: &str, args: Vec<Value>) -> CommandOutcome {
        match name.parse::<CommandName>() {
            Ok(command) => self.execute(command, args).await,
            Err(_) => {
                let error = ConferenceError::UnknownCommand { name: name.to_string() };
                component_error!(Component::Conference, "[Error] {}", error);
                CommandOutcome::Rejected
            }
        }
    }

    /// Dispatch a known command
    pub async fn execute(&self, command: CommandName, args: Vec<Value>) -> CommandOutcome {
        component_info!(Component::Conference, "Received command: {}", command);

        match command {
            CommandName::ShowDtmfMenu => {
                let visibility = self.core.toggle_menu();
                self.core.speak_feedback(command, visibility.is_shown());
                CommandOutcome::MenuToggled(visibility)
            }
            CommandName::ToggleAudio
            | CommandName::ToggleVideo
            | CommandName::ToggleChat
            | CommandName::ToggleTileView
            | CommandName::ToggleRiseHand => self.forward(command, args).await,
        }
    }

    // Feedback for forwarded commands arrives through the listeners, since the
    // widget may refuse or alter the request.
    async fn forward(&self, command: CommandName, args: Vec<Value>) -> CommandOutcome {
        let Some(widget) = self.core.widget.get() else {
            component_warn!(
                Component::Conference,
                "Command {} dropped: {}",
                command,
                ConferenceError::WidgetUnavailable
            );
            return CommandOutcome::Rejected;
        };

        match widget.execute_command(command.internal_name(), args).await {
            Ok(()) => CommandOutcome::Forwarded,
            Err(e) => {
                component_error!(Component::Conference, "❌ Forwarding {} failed: {}", command, e);
                CommandOutcome::Rejected
            }
        }
    }

    /// Speak the feedback for `command` in state `enabled`
    pub fn speak_feedback(&self, command: CommandName, enabled: bool) {
        self.core.speak_feedback(command, enabled);
    }

    /// String entry point for feedback; unknown commands are logged, nothing is spoken
    pub fn speak_feedback_by_name(&self, name: &str, enabled: bool) {
        match name.parse::<CommandName>() {
            Ok(command) => self.core.speak_feedback(command, enabled),
            Err(_) => {
                let error = ConferenceError::UnhandledTtsCommand { name: name.to_string() };
                component_error!(Component::Conference, "[Error] {}", error);
            }
        }
    }
}

impl<S, T> SessionCore<S, T>
where
    S: SpeechSynthesizer + 'static,
    T: Translator + 'static,
{
    fn lifecycle(&self) -> SessionLifecycle {
        *self.lifecycle.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn transition(&self, target: SessionLifecycle) -> bool {
        let mut lifecycle = self.lifecycle.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let from = *lifecycle;
        let moved = lifecycle.advance_to(target);
        if moved {
            component_debug!(Component::Conference, "Session lifecycle {:?} -> {:?}", from, target);
        }
        moved
    }

    fn menu_visibility(&self) -> MenuVisibility {
        if self.menu_shown.load(Ordering::SeqCst) {
            MenuVisibility::Shown
        } else {
            MenuVisibility::Hidden
        }
    }

    fn toggle_menu(&self) -> MenuVisibility {
        // fetch_xor returns the previous value
        let previous = if self.menu_shown.fetch_xor(true, Ordering::SeqCst) {
            MenuVisibility::Shown
        } else {
            MenuVisibility::Hidden
        };
        previous.toggled()
    }

    fn already_created(&self) -> ConferenceError {
        ConferenceError::AlreadyCreated {
            room: self.room.get().map(ToString::to_string).unwrap_or_default(),
        }
    }

    fn schedule_arming(core: &Arc<Self>, widget: Arc<dyn WidgetClient>) {
        let arming = core.config.listener_arming;
        let weak = Arc::downgrade(core);

        match arming {
            ListenerArming::Delay { .. } => {
                let delay = arming.settling_delay();
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    Self::arm_if_alive(&weak, &widget);
                });
            }
            ListenerArming::OnJoined { .. } => {
                let fallback = arming.settling_delay();
                let (joined_tx, joined_rx) = oneshot::channel::<()>();
                let joined_tx = Mutex::new(Some(joined_tx));

                widget.add_listener(
                    WidgetEventKind::VideoConferenceJoined,
                    Box::new(move |_: WidgetEvent| {
                        let sender = joined_tx.lock().ok().and_then(|mut slot| slot.take());
                        if let Some(sender) = sender {
                            let _ = sender.send(());
                        }
                    }),
                );

                tokio::spawn(async move {
                    tokio::select! {
                        _ = joined_rx => {}
                        _ = tokio::time::sleep(fallback) => {
                            component_warn!(
                                Component::Conference,
                                "Widget did not report joining within {:?}, arming listeners anyway",
                                fallback
                            );
                        }
                    }
                    Self::arm_if_alive(&weak, &widget);
                });
            }
        }
    }

    fn arm_if_alive(weak: &Weak<Self>, widget: &Arc<dyn WidgetClient>) {
        if let Some(core) = weak.upgrade() {
            Self::arm_listeners(&core, widget.as_ref());
        }
    }

    /// Register one feedback listener per event kind; runs at most once
    fn arm_listeners(core: &Arc<Self>, widget: &dyn WidgetClient) {
        if !core.transition(SessionLifecycle::ListenersArmed) {
            return;
        }

        for kind in WidgetEventKind::FEEDBACK {
            let weak = Arc::downgrade(core);
            widget.add_listener(
                kind,
                Box::new(move |event: WidgetEvent| {
                    if let Some(core) = weak.upgrade() {
                        core.on_widget_event(&event);
                    }
                }),
            );
        }

        component_info!(Component::Conference, "👂 Widget listeners armed");
    }

    fn on_widget_event(&self, event: &WidgetEvent) {
        component_debug!(Component::Conference, "Widget event: {:?}", event);
        if let Some((command, enabled)) = feedback::event_feedback(event) {
            self.speak_feedback(command, enabled);
        }
    }

    fn speak_feedback(&self, command: CommandName, enabled: bool) {
        if !self.config.enable_tts {
            return;
        }

        let key = feedback::translation_key(command, enabled, self.menu_visibility());
        match self.translator.translate(key) {
            Some(text) => self.speech.speak(&text),
            None => {
                component_warn!(
                    Component::Conference,
                    "No {} translation for {}",
                    self.translator.locale(),
                    key
                );
            }
        }
    }
}
