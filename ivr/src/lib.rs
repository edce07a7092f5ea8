//! IVR dial pad
//!
//! Collects a numeric conference code from keypad input, resolves it to a room
//! through the conference-mapping endpoint and hands the room to whatever
//! launches the conference. Rendering, resolution and launching are injected.

pub mod dial_pad;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

pub use dial_pad::DialPad;
pub use error::{IvrError, IvrResult};
pub use services::HttpRoomResolver;
pub use traits::{DialPadView, ErrorReporter, RoomResolver, SessionLauncher};
pub use traits::{MockDialPadView, MockErrorReporter, MockRoomResolver, MockSessionLauncher};
pub use types::*;
