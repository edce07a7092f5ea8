//! Type definitions for the conference session

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use shared::{MenuVisibility, RoomId, WidgetContainer};

/// Lifecycle of one session; transitions only move forward, one step at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionLifecycle {
    #[default]
    Uninitialized,
    ConfigLoaded,
    WidgetCreated,
    ListenersArmed,
}

impl SessionLifecycle {
    pub fn next(self) -> Option<SessionLifecycle> {
        match self {
            SessionLifecycle::Uninitialized => Some(SessionLifecycle::ConfigLoaded),
            SessionLifecycle::ConfigLoaded => Some(SessionLifecycle::WidgetCreated),
            SessionLifecycle::WidgetCreated => Some(SessionLifecycle::ListenersArmed),
            SessionLifecycle::ListenersArmed => None,
        }
    }

    /// Move to `target` if it is the immediate successor
    pub fn advance_to(&mut self, target: SessionLifecycle) -> bool {
        if self.next() == Some(target) {
            *self = target;
            true
        } else {
            false
        }
    }
}

/// Result of dispatching one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// DTMF menu flipped; carries the resulting visibility
    MenuToggled(MenuVisibility),
    /// Handed to the widget command API
    Forwarded,
    /// Unknown, or the widget could not take it; already logged
    Rejected,
}

/// Interface/config overwrites applied to every widget
///
/// The defaults are the deployment policy: guest-exit hint shown, call stats
/// off, French UI, audio and video unmuted, no peer-to-peer, no desktop sharing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetOverrides {
    pub interface_config: Value,
    pub config: Value,
}

impl Default for WidgetOverrides {
    fn default() -> Self {
        Self {
            interface_config: json!({
                "CLOSE_PAGE_GUEST_HINT": true,
            }),
            config: json!({
                "callStatsID": "",
                "defaultLanguage": "fr",
                "enablePopupExternalAuth": true,
                "startWithAudioMuted": false,
                "startWithVideoMuted": false,
                "p2p": { "enabled": false },
                "desktopSharingChromeDisabled": true,
            }),
        }
    }
}

/// Options handed to the widget constructor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetOptions {
    pub room_name: String,
    pub width: String,
    pub height: String,
    pub parent_node: String,
    pub interface_config_overwrite: Value,
    pub config_overwrite: Value,
}

impl WidgetOptions {
    pub fn new(room: &RoomId, container: &WidgetContainer, overrides: WidgetOverrides) -> Self {
        Self {
            room_name: room.to_string(),
            width: container.width.clone(),
            height: container.height.clone(),
            parent_node: container.parent_node.clone(),
            interface_config_overwrite: overrides.interface_config,
            config_overwrite: overrides.config,
        }
    }
}

/// Host the widget connects to: the configured domain without its URI scheme
pub fn connection_host(domain: &str) -> &str {
    match domain.split_once("://") {
        Some((scheme, rest)) if is_uri_scheme(scheme) => rest,
        _ => domain,
    }
}

fn is_uri_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    matches!(chars.next(), Some(first) if first.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
