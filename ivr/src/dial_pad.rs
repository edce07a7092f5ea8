//! Dial pad state machine
//!
//! Keys build the conference code; `#` (or the enter button) resolves it and,
//! when a room comes back, hands it to the launcher. Only one resolution runs at
//! a time.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use shared::{Component, Configuration, ErrorReason, RoomId, component_debug, component_error, component_info, component_warn};

use crate::error::{IvrError, IvrResult};
use crate::traits::{DialPadView, ErrorReporter, RoomResolver, SessionLauncher};
use crate::types::{DialState, Key, KeyAction, KeyOutcome};

/// Clears the busy flag when a resolution ends, whatever the exit path
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// IVR dial pad with injected collaborators
pub struct DialPad<R, V, E, L>
where
    R: RoomResolver,
    V: DialPadView,
    E: ErrorReporter,
    L: SessionLauncher,
{
    config: Arc<Configuration>,
    resolver: R,
    view: V,
    reporter: E,
    launcher: L,
    state: Mutex<DialState>,
    busy: AtomicBool,
}

impl<R, V, E, L> DialPad<R, V, E, L>
where
    R: RoomResolver,
    V: DialPadView,
    E: ErrorReporter,
    L: SessionLauncher,
{
    pub fn new(config: Arc<Configuration>, resolver: R, view: V, reporter: E, launcher: L) -> Self {
        Self {
            config,
            resolver,
            view,
            reporter,
            launcher,
            state: Mutex::new(DialState::new()),
            busy: AtomicBool::new(false),
        }
    }

    pub fn enabled(&self) -> bool {
        self.config.ivr.enabled
    }

    /// Push the code length bounds to the view and show the dial pad
    pub fn attach(&self) {
        let bounds = self.config.ivr.conference_code;
        self.view.set_length_bounds(bounds.min_length, bounds.max_length);
        self.show();
        component_info!(
            Component::Ivr,
            "☎️ Dial pad attached (code length {}..={})",
            bounds.min_length,
            bounds.max_length
        );
    }

    pub fn show(&self) {
        self.view.show_container();
    }

    pub fn hide(&self) {
        self.view.hide_container();
    }

    /// Current code
    pub fn code(&self) -> String {
        self.state().as_str().to_string()
    }

    pub fn is_resolving(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Apply one key
    pub async fn on_key(&self, key: Key) -> IvrResult<KeyOutcome> {
        match KeyAction::classify(&key) {
            KeyAction::EnterRoom => {
                self.enter_room().await?;
                Ok(KeyOutcome::EnterRoom)
            }
            KeyAction::AppendDigit(digit) => {
                let max = self.config.ivr.conference_code.max_length;
                let mut state = self.state();
                if state.len() >= max {
                    component_debug!(Component::Ivr, "Digit {} ignored, code already {} long", digit, max);
                    return Ok(KeyOutcome::Suppressed);
                }
                state.push(digit);
                Ok(KeyOutcome::DigitAppended)
            }
            KeyAction::RemoveDigit => {
                self.state().pop();
                Ok(KeyOutcome::DigitRemoved)
            }
            KeyAction::Suppress => {
                component_debug!(Component::Ivr, "Key {} suppressed", key);
                Ok(KeyOutcome::Suppressed)
            }
        }
    }

    /// Resolve the current code and launch the room it maps to
    pub async fn enter_room(&self) -> IvrResult<Option<RoomId>> {
        let code = self.code();
        let min = self.config.ivr.conference_code.min_length;

        if code.len() < min {
            let error = IvrError::RoomIdTooShort { length: code.len(), min };
            component_warn!(Component::Ivr, "{}", error);
            self.reporter.render_error(ErrorReason::RoomIdTooShort);
            return Err(error);
        }

        let Some(_busy) = BusyGuard::acquire(&self.busy) else {
            component_warn!(Component::Ivr, "Code {} ignored: {}", code, IvrError::ResolutionInProgress);
            return Err(IvrError::ResolutionInProgress);
        };

        self.view.hide_errors();
        self.view.show_loader();
        component_info!(Component::Ivr, "🔎 Resolving conference code {}", code);

        match self.resolver.resolve(&code).await {
            Ok(Some(room)) => {
                component_info!(Component::Ivr, "✅ Code {} resolved to room {}", code, room);
                self.hide();
                self.state().clear();
                self.launcher.launch(room.clone()).await.inspect_err(|e| {
                    // Back to an empty dial pad the user can retry from
                    self.view.clear_input();
                    self.view.hide_loader();
                    self.show();
                    self.reporter.render_error(ErrorReason::RoomResolutionFailed);
                    component_error!(Component::Ivr, "❌ {}", e);
                })?;
                Ok(Some(room))
            }
            Ok(None) if !self.config.ivr.report_missing_conference => {
                component_info!(Component::Ivr, "Code {} did not map to any conference", code);
                self.view.hide_loader();
                Ok(None)
            }
            Ok(None) => Err(self.resolution_failed(format!("no conference for code {code}"))),
            Err(IvrError::RoomResolutionFailed { reason }) => Err(self.resolution_failed(reason)),
            Err(e) => Err(self.resolution_failed(e.to_string())),
        }
    }

    fn resolution_failed(&self, reason: String) -> IvrError {
        self.state().clear();
        self.view.clear_input();
        self.view.hide_loader();
        self.reporter.render_error(ErrorReason::RoomResolutionFailed);

        let error = IvrError::RoomResolutionFailed { reason };
        component_error!(Component::Ivr, "❌ {}", error);
        error
    }

    fn state(&self) -> MutexGuard<'_, DialState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
