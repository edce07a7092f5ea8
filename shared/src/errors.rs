//! Shared error types for the dial-pad helper

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Configuration could not be loaded from {source_path}: {reason}")]
    ConfigLoadFailure { source_path: String, reason: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Command '{name}' not found")]
    UnknownCommand { name: String },

    #[error("Invalid room identifier: {input:?}")]
    InvalidRoomId { input: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
