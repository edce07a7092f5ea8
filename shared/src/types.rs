//! Core shared types and identifiers

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{SharedError, SharedResult};

/// Component tag attached to every log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Component {
    /// HTTP server and process lifecycle
    Server,
    /// WebSocket bridge to one page
    Bridge,
    /// Dial pad / room resolution
    Ivr,
    /// Conference widget session
    Conference,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Server => write!(f, "server"),
            Component::Bridge => write!(f, "bridge"),
            Component::Ivr => write!(f, "ivr"),
            Component::Conference => write!(f, "conference"),
        }
    }
}

/// Opaque name of a conference room
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoomId(String);

impl RoomId {
    pub fn new(value: impl Into<String>) -> SharedResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(SharedError::InvalidRoomId { input: value });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RoomId {
    type Error = SharedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RoomId> for String {
    fn from(room: RoomId) -> Self {
        room.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Commands accepted from the page or an operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandName {
    ShowDtmfMenu,
    ToggleAudio,
    ToggleVideo,
    ToggleChat,
    ToggleTileView,
    ToggleRiseHand,
}

impl CommandName {
    pub const ALL: [CommandName; 6] = [
        CommandName::ShowDtmfMenu,
        CommandName::ToggleAudio,
        CommandName::ToggleVideo,
        CommandName::ToggleChat,
        CommandName::ToggleTileView,
        CommandName::ToggleRiseHand,
    ];

    /// External (page-facing) name
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandName::ShowDtmfMenu => "show-dtmf-menu",
            CommandName::ToggleAudio => "toggle-audio",
            CommandName::ToggleVideo => "toggle-video",
            CommandName::ToggleChat => "toggle-chat",
            CommandName::ToggleTileView => "toggle-tile-view",
            CommandName::ToggleRiseHand => "toggle-rise-hand",
        }
    }

    /// Name understood by the conferencing widget command API
    pub fn internal_name(&self) -> &'static str {
        match self {
            CommandName::ShowDtmfMenu => "showDTMFMenu",
            CommandName::ToggleAudio => "toggleAudio",
            CommandName::ToggleVideo => "toggleVideo",
            CommandName::ToggleChat => "toggleChat",
            CommandName::ToggleTileView => "toggleTileView",
            CommandName::ToggleRiseHand => "toggleRiseHand",
        }
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandName {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandName::ALL
            .into_iter()
            .find(|command| command.as_str() == s)
            .ok_or_else(|| SharedError::UnknownCommand { name: s.to_string() })
    }
}

/// Visibility of the DTMF menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuVisibility {
    Shown,
    #[default]
    Hidden,
}

impl MenuVisibility {
    pub fn toggled(self) -> Self {
        match self {
            MenuVisibility::Shown => MenuVisibility::Hidden,
            MenuVisibility::Hidden => MenuVisibility::Shown,
        }
    }

    pub fn is_shown(self) -> bool {
        self == MenuVisibility::Shown
    }
}

/// Where the page should mount the widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetContainer {
    pub width: String,
    pub height: String,
    pub parent_node: String,
}

impl Default for WidgetContainer {
    fn default() -> Self {
        Self {
            width: "100%".to_string(),
            height: "100%".to_string(),
            parent_node: "main_iframe_container".to_string(),
        }
    }
}

/// Event names emitted by the conferencing widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidgetEventKind {
    AudioMuteStatusChanged,
    VideoMuteStatusChanged,
    ChatUpdated,
    TileViewChanged,
    RaiseHandUpdated,
    VideoConferenceJoined,
}

impl WidgetEventKind {
    /// Events that produce spoken feedback once listeners are armed
    pub const FEEDBACK: [WidgetEventKind; 5] = [
        WidgetEventKind::AudioMuteStatusChanged,
        WidgetEventKind::VideoMuteStatusChanged,
        WidgetEventKind::ChatUpdated,
        WidgetEventKind::TileViewChanged,
        WidgetEventKind::RaiseHandUpdated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetEventKind::AudioMuteStatusChanged => "audioMuteStatusChanged",
            WidgetEventKind::VideoMuteStatusChanged => "videoMuteStatusChanged",
            WidgetEventKind::ChatUpdated => "chatUpdated",
            WidgetEventKind::TileViewChanged => "tileViewChanged",
            WidgetEventKind::RaiseHandUpdated => "raiseHandUpdated",
            WidgetEventKind::VideoConferenceJoined => "videoConferenceJoined",
        }
    }
}

impl fmt::Display for WidgetEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event payload reported by the conferencing widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum WidgetEvent {
    #[serde(rename = "audioMuteStatusChanged")]
    AudioMuteStatusChanged { muted: bool },

    #[serde(rename = "videoMuteStatusChanged")]
    VideoMuteStatusChanged { muted: bool },

    #[serde(rename = "chatUpdated")]
    ChatUpdated {
        #[serde(rename = "isOpen")]
        is_open: bool,
    },

    #[serde(rename = "tileViewChanged")]
    TileViewChanged { enabled: bool },

    #[serde(rename = "raiseHandUpdated")]
    RaiseHandUpdated {
        #[serde(rename = "handRaised", deserialize_with = "truthy")]
        hand_raised: bool,
    },

    #[serde(rename = "videoConferenceJoined")]
    VideoConferenceJoined {
        #[serde(rename = "roomName", default)]
        room_name: Option<String>,
    },
}

impl WidgetEvent {
    pub fn kind(&self) -> WidgetEventKind {
        match self {
            WidgetEvent::AudioMuteStatusChanged { .. } => WidgetEventKind::AudioMuteStatusChanged,
            WidgetEvent::VideoMuteStatusChanged { .. } => WidgetEventKind::VideoMuteStatusChanged,
            WidgetEvent::ChatUpdated { .. } => WidgetEventKind::ChatUpdated,
            WidgetEvent::TileViewChanged { .. } => WidgetEventKind::TileViewChanged,
            WidgetEvent::RaiseHandUpdated { .. } => WidgetEventKind::RaiseHandUpdated,
            WidgetEvent::VideoConferenceJoined { .. } => WidgetEventKind::VideoConferenceJoined,
        }
    }
}

// Newer widget builds report a raise timestamp (0 when lowered) instead of a bool.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Number(f64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => value,
        Flag::Number(value) => value != 0.0,
    })
}
