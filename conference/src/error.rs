//! Conference-specific error types

use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConferenceError {
    #[error("Command '{name}' not found")]
    UnknownCommand { name: String },

    #[error("[TTS] Command '{name}' not handled")]
    UnhandledTtsCommand { name: String },

    #[error("Widget already created for room {room}")]
    AlreadyCreated { room: String },

    #[error("Widget creation failed: {message}")]
    WidgetCreation { message: String },

    #[error("Widget not created yet")]
    WidgetUnavailable,

    #[error("Widget bridge error: {message}")]
    Bridge { message: String },

    #[error("Unknown locale: {lang}")]
    UnknownLocale { lang: String },

    #[error("Shared component error")]
    SharedError(#[from] SharedError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type ConferenceResult<T> = Result<T, ConferenceError>;
