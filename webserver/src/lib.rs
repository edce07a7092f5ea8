//! Page bridge server for the conference dial pad
//!
//! Serves the static page and its configuration, and runs one dial pad plus one
//! conference session per connected page over the `/bridge` WebSocket.

pub mod controller;
pub mod error;
pub mod server;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod web;

pub use controller::PageController;
pub use error::{WebServerError, WebServerResult};
pub use server::WebServer;
pub use state::AppState;
pub use types::*;

pub use traits::{MockPageSink, PageSink};

pub use services::{
    ChannelSink, ConferenceLauncher, PageSpeechSynthesizer, PageView, PageWidgetClient, PageWidgetFactory,
    WidgetRegistry,
};
