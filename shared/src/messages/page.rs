//! Page ↔ server message definitions

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{WidgetContainer, WidgetEvent};

/// Messages sent by the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageMessage {
    /// Raw `KeyboardEvent.key` from the dial pad input
    Key { key: String },

    /// Enter-room button clicked
    EnterRoom,

    /// External command (DTMF, operator UI)
    Command {
        name: String,
        #[serde(default)]
        args: Vec<Value>,
    },

    /// Event forwarded from the conferencing widget
    WidgetEvent(WidgetEvent),

    /// Geometry of the widget container, sent once before any room is entered
    Container(WidgetContainer),
}

/// Page elements the server can show or hide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiElement {
    IvrContainer,
    Loader,
    Errors,
    DtmfMenu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiAction {
    Show,
    Hide,
}

/// Error keys rendered by the page's error display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorReason {
    RoomIdTooShort,
    #[serde(rename = "room_id")]
    RoomResolutionFailed,
    MissingRoomId,
}

/// Directives sent to the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostMessage {
    /// Instantiate the conferencing widget
    CreateWidget { host: String, options: Value },

    /// Call the widget command API
    WidgetCommand { name: String, args: Vec<Value> },

    /// Speak one utterance with the page's speech synthesis
    Speak { text: String, lang: Option<String> },

    SetTitle { title: String },

    Ui { element: UiElement, action: UiAction },

    /// `minlength` / `maxlength` of the code input
    SetLengthBounds { min: usize, max: usize },

    ClearInput,

    RenderError { reason: ErrorReason },
}

impl HostMessage {
    pub fn show(element: UiElement) -> Self {
        HostMessage::Ui {
            element,
            action: UiAction::Show,
        }
    }

    pub fn hide(element: UiElement) -> Self {
        HostMessage::Ui {
            element,
            action: UiAction::Hide,
        }
    }
}
