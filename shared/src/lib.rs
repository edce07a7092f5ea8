//! Shared types for the conference dial-pad helper
//!
//! Contains the configuration model, the identifiers and enums every crate
//! agrees on, the page bridge wire messages and the logging setup.

pub mod config;
pub mod errors;
pub mod logging;
pub mod messages;
pub mod types;

pub use config::{ConferenceCodeConfig, ConfigStore, Configuration, IvrConfig, ListenerArming};
pub use errors::*;
pub use types::*;

pub use messages::{ErrorReason, HostMessage, PageMessage, UiAction, UiElement};
