//! Page bridge messages
//!
//! The browser page is a thin client: it reports keys, commands and widget
//! events (`PageMessage`) and executes the directives it receives
//! (`HostMessage`). Both travel as JSON text frames over the bridge socket.

pub mod page;

pub use page::{ErrorReason, HostMessage, PageMessage, UiAction, UiElement};
