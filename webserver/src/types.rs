//! Type definitions for the webserver

use conference::{ConferenceSession, LocaleCatalog};
use ivr::{DialPad, HttpRoomResolver};
use serde::Deserialize;

use crate::services::{ConferenceLauncher, PageSpeechSynthesizer, PageView, PageWidgetFactory};

/// Conference session driving the widget of one page
pub type PageSession = ConferenceSession<PageWidgetFactory, PageSpeechSynthesizer, LocaleCatalog>;

/// Dial pad rendered by one page
pub type PageDialPad = DialPad<HttpRoomResolver, PageView, PageView, ConferenceLauncher>;

/// Query string of `/bridge`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BridgeParams {
    pub room_id: Option<String>,
}
