//! Health and configuration handlers.

use axum::{extract::State, Json};
use serde::Serialize;

use mixsight::AnalyzerConfig;

use crate::server::state::AppState;

/// Liveness response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /api/config - the policy the server analyzes with.
pub async fn get_config(State(state): State<AppState>) -> Json<AnalyzerConfig> {
    Json(state.analyzer.config().clone())
}
