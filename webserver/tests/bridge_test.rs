//! End-to-end page bridge over a real socket

mod fixtures;

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use serde_json::{Value, json};
use shared::Configuration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};
use webserver::WebServer;

type PageSocket = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

/// Running server plus the trigger that stops it
struct TestServer {
    addr: std::net::SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    _static_dir: tempfile::TempDir,
}

impl TestServer {
    async fn start(config: Configuration) -> Self {
        let static_dir = tempfile::tempdir().unwrap();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown, stopped) = oneshot::channel::<()>();

        let server = WebServer::new(fixtures::store(&config), static_dir.path());
        tokio::spawn(async move {
            server
                .serve(listener, async move {
                    let _ = stopped.await;
                })
                .await
                .unwrap();
        });

        Self {
            addr,
            shutdown: Some(shutdown),
            _static_dir: static_dir,
        }
    }

    async fn connect(&self, query: &str) -> PageSocket {
        let url = format!("ws://{}/bridge{}", self.addr, query);
        let (socket, _) = connect_async(url).await.unwrap();
        socket
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

/// Next text frame as JSON, `None` once the server closes
async fn next_directive(socket: &mut PageSocket) -> Option<Value> {
    loop {
        let frame = tokio::time::timeout(Duration::from_secs(5), socket.next())
            .await
            .expect("timed out waiting for directive")?;
        match frame.ok()? {
            Message::Text(text) => return Some(serde_json::from_str(&text).unwrap()),
            Message::Close(_) => return None,
            _ => continue,
        }
    }
}

#[tokio::test]
async fn test_room_link_creates_widget() {
    let server = TestServer::start(fixtures::direct_config()).await;
    let mut page = server.connect("?room_id=room-42").await;

    let title = next_directive(&mut page).await.unwrap();
    assert_eq!(title, json!({"type": "set_title", "title": "room-42"}));

    let widget = next_directive(&mut page).await.unwrap();
    assert_eq!(widget["type"], "create_widget");
    assert_eq!(widget["host"], fixtures::HOST);
    assert_eq!(widget["options"]["roomName"], "room-42");
    assert_eq!(widget["options"]["parentNode"], "main_iframe_container");
}

#[tokio::test]
async fn test_commands_reach_widget_over_socket() {
    let server = TestServer::start(fixtures::direct_config()).await;
    let mut page = server.connect("?room_id=room-42").await;
    next_directive(&mut page).await.unwrap();
    next_directive(&mut page).await.unwrap();

    page.send(Message::Text("not json".to_string())).await.unwrap();
    page.send(Message::Text(
        json!({"type": "command", "name": "toggle-audio"}).to_string(),
    ))
    .await
    .unwrap();

    let command = next_directive(&mut page).await.unwrap();
    assert_eq!(command, json!({"type": "widget_command", "name": "toggleAudio", "args": []}));
}

#[tokio::test]
async fn test_missing_room_renders_error_and_closes() {
    let server = TestServer::start(fixtures::direct_config()).await;
    let mut page = server.connect("").await;

    let error = next_directive(&mut page).await.unwrap();
    assert_eq!(error, json!({"type": "render_error", "reason": "missing_room_id"}));
    assert!(next_directive(&mut page).await.is_none());
}

#[tokio::test]
async fn test_dial_pad_page_receives_bounds() {
    let server = TestServer::start(fixtures::ivr_config("http://127.0.0.1:9")).await;
    let mut page = server.connect("").await;

    let bounds = next_directive(&mut page).await.unwrap();
    assert_eq!(bounds, json!({"type": "set_length_bounds", "min": 4, "max": 10}));

    let shown = next_directive(&mut page).await.unwrap();
    assert_eq!(shown, json!({"type": "ui", "element": "ivr_container", "action": "show"}));

    page.send(Message::Text(json!({"type": "key", "key": "7"}).to_string()))
        .await
        .unwrap();
    page.send(Message::Text(json!({"type": "enter_room"}).to_string()))
        .await
        .unwrap();

    let too_short = next_directive(&mut page).await.unwrap();
    assert_eq!(too_short, json!({"type": "render_error", "reason": "room_id_too_short"}));
}

#[tokio::test]
async fn test_room_link_uses_reported_container() {
    let server = TestServer::start(fixtures::direct_config()).await;
    let mut page = server.connect("?room_id=room-42").await;

    page.send(Message::Text(
        json!({"type": "container", "width": "800px", "height": "600px", "parentNode": "meeting"}).to_string(),
    ))
    .await
    .unwrap();

    next_directive(&mut page).await.unwrap();
    let widget = next_directive(&mut page).await.unwrap();
    assert_eq!(widget["type"], "create_widget");
    assert_eq!(widget["options"]["width"], "800px");
    assert_eq!(widget["options"]["parentNode"], "meeting");
}

#[tokio::test]
async fn test_room_link_keeps_early_command() {
    let server = TestServer::start(fixtures::direct_config()).await;
    let mut page = server.connect("?room_id=room-42").await;

    page.send(Message::Text(json!({"type": "command", "name": "toggle-chat"}).to_string()))
        .await
        .unwrap();

    assert_eq!(next_directive(&mut page).await.unwrap()["type"], "set_title");
    assert_eq!(next_directive(&mut page).await.unwrap()["type"], "create_widget");
    let command = next_directive(&mut page).await.unwrap();
    assert_eq!(command, json!({"type": "widget_command", "name": "toggleChat", "args": []}));
}
