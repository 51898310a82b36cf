use crate::{dto::HealthResponse, state::AppState};
use axum::{extract::State, http::header, response::IntoResponse, Json};
use tracing::debug;

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    debug!("Health check requested");
    (
        [
            (header::CACHE_CONTROL, "public, max-age=60"),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        ],
        Json(HealthResponse {
            service: "DoH Proxy".to_string(),
            status: "healthy".to_string(),
            servers: state.pool_size(),
            rules: state.rule_count(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }),
    )
}
