//! Collaborator traits for dependency injection

use async_trait::async_trait;
use shared::{ErrorReason, RoomId};

use crate::error::IvrResult;

/// Maps a conference code to a room
#[mockall::automock]
#[async_trait]
pub trait RoomResolver: Send + Sync {
    /// `Ok(None)` when the endpoint answered without a conference
    async fn resolve(&self, code: &str) -> IvrResult<Option<RoomId>>;
}

/// Dial pad UI
#[mockall::automock]
pub trait DialPadView: Send + Sync {
    fn set_length_bounds(&self, min: usize, max: usize);
    fn show_container(&self);
    fn hide_container(&self);
    fn show_loader(&self);
    fn hide_loader(&self);
    fn hide_errors(&self);
    /// Empty the visible input field
    fn clear_input(&self);
}

/// User-visible error rendering
#[mockall::automock]
pub trait ErrorReporter: Send + Sync {
    fn render_error(&self, reason: ErrorReason);
}

/// Starts the conference once a room is known
#[mockall::automock]
#[async_trait]
pub trait SessionLauncher: Send + Sync {
    async fn launch(&self, room: RoomId) -> IvrResult<()>;
}
