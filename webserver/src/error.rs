//! WebServer-specific error types

use conference::ConferenceError;
use ivr::IvrError;
use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("Page controller already initialized")]
    AlreadyInitialized,

    #[error("room_id not set")]
    MissingRoomId,

    #[error("Page disconnected")]
    PageDisconnected,

    #[error("Invalid page message: {details}")]
    InvalidMessage { details: String },

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Shared error: {0}")]
    SharedError(#[from] SharedError),

    #[error("Conference error: {0}")]
    ConferenceError(#[from] ConferenceError),

    #[error("IVR error: {0}")]
    IvrError(#[from] IvrError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type WebServerResult<T> = Result<T, WebServerError>;
