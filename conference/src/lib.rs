//! Conference session library
//!
//! Owns one conferencing-widget instance per room: translates page/operator
//! commands into widget API calls and widget events back into spoken feedback.
//! The widget, the speech synthesizer and the translator are injected.

pub mod error;
pub mod feedback;
pub mod services;
pub mod session;
pub mod traits;
pub mod types;

pub use error::{ConferenceError, ConferenceResult};
pub use session::ConferenceSession;
pub use types::*;

pub use traits::{EventListener, SpeechSynthesizer, Translator, WidgetClient, WidgetFactory};
pub use traits::{MockSpeechSynthesizer, MockTranslator, MockWidgetClient, MockWidgetFactory};

pub use services::LocaleCatalog;
