//! Plain HTTP endpoints

use axum::{extract::State, response::Json};
use serde_json::{Value, json};

use crate::state::AppState;

/// Configuration document, verbatim
pub async fn get_config(State(state): State<AppState>) -> Json<Value> {
    Json(state.store().document().clone())
}

/// Liveness and a summary of the loaded configuration
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let config = state.config();

    Json(json!({
        "status": "ok",
        "domain": config.domain,
        "ivr_enabled": config.ivr.enabled,
        "tts_enabled": config.enable_tts,
        "uptime_seconds": state.uptime_seconds(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
