//! Service metadata endpoints.

use axum::{extract::State, response::Json};
use serde::Serialize;

use crate::api::server::AppState;

/// Response for `/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub node_id: String,
    pub network: String,
}

/// Response for `/status`.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub node_id: String,
    pub service: String,
    pub status: String,
    pub version: String,
    pub network: String,
    pub chain: String,
    pub chain_id: u64,
    pub uptime_secs: u64,
    pub timestamp: String,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        node_id: state.config.node_id.clone(),
        network: state.config.network.clone(),
    })
}

pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        node_id: state.config.node_id.clone(),
        service: state.config.network.clone(),
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        network: state.config.network.clone(),
        chain: state.config.chain_name.clone(),
        chain_id: state.config.chain_id,
        uptime_secs: state.started_at.elapsed().as_secs(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

pub async fn config_info(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "chain_id": state.config.chain_id,
        "chain": state.config.chain_name,
        "network": state.config.network,
        "version": env!("CARGO_PKG_VERSION"),
        "upstream_feeds_enabled": state.feeds.enabled(),
    }))
}
