//! Page bridge WebSocket
//!
//! Every connection gets its own [`PageController`]. Directives flow out through
//! an mpsc-fed writer task; page messages are handled one at a time, in order.
//! Room links wait briefly for the page's widget container before launching.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{
        Query, State, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use shared::{Component, PageMessage, component_debug, component_error, component_info, component_warn};
use uuid::Uuid;

use crate::controller::PageController;
use crate::error::WebServerError;
use crate::services::ChannelSink;
use crate::state::AppState;
use crate::types::BridgeParams;

/// How long a room link waits for the page's `container` message
const CONTAINER_WAIT: Duration = Duration::from_millis(500);

pub async fn bridge_handler(
    ws: WebSocketUpgrade,
    Query(params): Query<BridgeParams>,
    State(state): State<AppState>,
) -> Response {
    ws.on_upgrade(move |socket| handle_bridge(socket, state, params))
}

async fn handle_bridge(socket: WebSocket, state: AppState, params: BridgeParams) {
    let connection_id = Uuid::new_v4();
    component_info!(Component::Bridge, "🔗 Page connected: {}", connection_id);

    let (mut sender, mut receiver) = socket.split();
    let (sink, mut outgoing) = ChannelSink::channel();

    let outgoing_task = tokio::spawn(async move {
        while let Some(message) = outgoing.recv().await {
            let json = match serde_json::to_string(&message) {
                Ok(json) => json,
                Err(e) => {
                    component_error!(Component::Bridge, "Failed to serialize directive: {}", e);
                    continue;
                }
            };

            if let Err(e) = sender.send(Message::Text(json)).await {
                component_warn!(Component::Bridge, "Failed to send to page {}: {}", connection_id, e);
                break;
            }
        }

        let _ = sender.close().await;
        component_debug!(Component::Bridge, "Outgoing task ended for page {}", connection_id);
    });

    let controller = match PageController::new(state.config(), Arc::new(sink)) {
        Ok(controller) => controller,
        Err(e) => {
            component_error!(Component::Bridge, "❌ Page {} setup failed: {}", connection_id, e);
            outgoing_task.abort();
            return;
        }
    };

    // A room link launches at once, so give the page a moment to report its container first
    let mut pending = None;
    if params.room_id.is_some() {
        match tokio::time::timeout(CONTAINER_WAIT, receiver.next()).await {
            Ok(Some(Ok(Message::Text(text)))) => match parse(connection_id, &text) {
                Some(message @ PageMessage::Container(_)) => dispatch(&controller, connection_id, message).await,
                other => pending = other,
            },
            Ok(Some(Ok(_))) => {}
            Ok(Some(Err(_))) | Ok(None) => {
                component_info!(Component::Bridge, "👋 Page {} left before starting", connection_id);
                outgoing_task.abort();
                return;
            }
            Err(_) => {
                component_debug!(Component::Bridge, "Page {} sent no container, using default", connection_id);
            }
        }
    }

    if let Err(e) = controller.initialize(params.room_id).await {
        if matches!(e, WebServerError::MissingRoomId) {
            // Flush the error directive, then let the writer close the socket
            drop(controller);
            let _ = outgoing_task.await;
            component_info!(Component::Bridge, "👋 Page {} closed: {}", connection_id, e);
            return;
        }
        component_error!(Component::Bridge, "❌ Page {} initialization failed: {}", connection_id, e);
    }

    if let Some(message) = pending {
        dispatch(&controller, connection_id, message).await;
    }

    while let Some(message) = receiver.next().await {
        let message = match message {
            Ok(message) => message,
            Err(e) => {
                component_warn!(Component::Bridge, "WebSocket error for page {}: {}", connection_id, e);
                break;
            }
        };

        match message {
            Message::Text(text) => {
                component_debug!(Component::Bridge, "📨 Page {}: {}", connection_id, text);
                if let Some(message) = parse(connection_id, &text) {
                    dispatch(&controller, connection_id, message).await;
                }
            }
            Message::Binary(_) => {
                component_warn!(Component::Bridge, "Binary message from page {} ignored", connection_id);
            }
            Message::Ping(_) | Message::Pong(_) => {}
            Message::Close(_) => {
                component_info!(Component::Bridge, "Page {} requested close", connection_id);
                break;
            }
        }
    }

    outgoing_task.abort();
    component_info!(Component::Bridge, "👋 Page disconnected: {}", connection_id);
}

fn parse(connection_id: Uuid, text: &str) -> Option<PageMessage> {
    serde_json::from_str::<PageMessage>(text)
        .inspect_err(|e| {
            let error = WebServerError::InvalidMessage { details: e.to_string() };
            component_warn!(Component::Bridge, "Page {}: {}", connection_id, error);
        })
        .ok()
}

async fn dispatch(controller: &PageController, connection_id: Uuid, message: PageMessage) {
    if let Err(e) = controller.handle(message).await {
        component_error!(Component::Bridge, "Page {} message failed: {}", connection_id, e);
    }
}
