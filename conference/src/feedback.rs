//! Spoken-feedback mapping
//!
//! Pure functions: which translation key a command state maps to, and which
//! command state a widget event reports.

use shared::{CommandName, MenuVisibility, WidgetEvent};

/// Translation key for `command` in state `enabled`
///
/// The DTMF menu reads the current `menu` visibility and ignores `enabled`.
pub fn translation_key(command: CommandName, enabled: bool, menu: MenuVisibility) -> &'static str {
    match command {
        CommandName::ShowDtmfMenu => {
            if menu.is_shown() {
                "menu_shown"
            } else {
                "menu_hidden"
            }
        }
        CommandName::ToggleAudio => pick(enabled, "micro_enabled", "micro_disabled"),
        CommandName::ToggleVideo => pick(enabled, "camera_enabled", "camera_disabled"),
        CommandName::ToggleChat => pick(enabled, "chat_shown", "chat_hidden"),
        CommandName::ToggleTileView => pick(enabled, "tile_view_shown", "tile_view_hidden"),
        CommandName::ToggleRiseHand => pick(enabled, "hand_raised", "hand_down"),
    }
}

fn pick(enabled: bool, on: &'static str, off: &'static str) -> &'static str {
    if enabled { on } else { off }
}

/// Command and enabled-polarity reported by a widget event
///
/// Mute events carry `muted`, the inverse of the command's enabled state.
pub fn event_feedback(event: &WidgetEvent) -> Option<(CommandName, bool)> {
    match *event {
        WidgetEvent::AudioMuteStatusChanged { muted } => Some((CommandName::ToggleAudio, !muted)),
        WidgetEvent::VideoMuteStatusChanged { muted } => Some((CommandName::ToggleVideo, !muted)),
        WidgetEvent::ChatUpdated { is_open } => Some((CommandName::ToggleChat, is_open)),
        WidgetEvent::TileViewChanged { enabled } => Some((CommandName::ToggleTileView, enabled)),
        WidgetEvent::RaiseHandUpdated { hand_raised } => Some((CommandName::ToggleRiseHand, hand_raised)),
        WidgetEvent::VideoConferenceJoined { .. } => None,
    }
}
