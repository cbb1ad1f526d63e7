//! Health check endpoints
//!
//! Health and liveness checks for monitoring and container orchestration.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::server::state::AppState;

/// Response for the main health check endpoint
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub environment: String,
    pub uptime_seconds: u64,
    /// Where quiz requests are sent
    pub quiz_api: String,
}

/// Response for the liveness check
#[derive(Serialize)]
pub struct LivenessResponse {
    pub alive: bool,
}

/// GET /health
///
/// Does not call the quiz service; an unreachable upstream only affects the
/// quiz page.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.settings.app_version.clone(),
        environment: state.settings.environment.to_string(),
        uptime_seconds: state.uptime_seconds(),
        quiz_api: state.quiz_api.endpoint().to_string(),
    })
}

/// GET /liveness
pub async fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse { alive: true })
}
