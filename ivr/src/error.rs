//! IVR-specific error types

use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IvrError {
    #[error("Room ID too short: {length} digits, at least {min} required")]
    RoomIdTooShort { length: usize, min: usize },

    #[error("Room resolution failed: {reason}")]
    RoomResolutionFailed { reason: String },

    #[error("A room resolution is already in progress")]
    ResolutionInProgress,

    #[error("Conference launch failed: {reason}")]
    LaunchFailed { reason: String },

    #[error("Shared component error")]
    SharedError(#[from] SharedError),
}

pub type IvrResult<T> = Result<T, IvrError>;
