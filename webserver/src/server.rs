//! HTTP server: static page, configuration, health and the page bridge

use std::future::Future;
use std::net::SocketAddr;
use std::path::PathBuf;

use axum::{Router, routing::get};
use shared::{Component, ConfigStore, component_info};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::error::{WebServerError, WebServerResult};
use crate::state::AppState;
use crate::web::handlers::{api, bridge};

pub struct WebServer {
    state: AppState,
    static_dir: PathBuf,
}

impl WebServer {
    pub fn new(store: ConfigStore, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            state: AppState::new(store),
            static_dir: static_dir.into(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/bridge", get(bridge::bridge_handler))
            .route("/config.json", get(api::get_config))
            .route("/health", get(api::health_check))
            .fallback_service(ServeDir::new(&self.static_dir))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.state.clone())
    }

    /// Bind `addr` and serve until `shutdown` resolves
    pub async fn run<F>(&self, addr: SocketAddr, shutdown: F) -> WebServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {addr}: {e}")))?;

        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> WebServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        component_info!(Component::Server, "🌐 Listening on http://{}", addr);
        component_info!(Component::Server, "📁 Serving static files from {}", self.static_dir.display());

        axum::serve(listener, self.build_router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| WebServerError::ServerStartup(e.to_string()))
    }
}
