use crate::{
    dto::{LocationFailure, LocationResponse},
    state::AppState,
};
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, info, instrument};

#[instrument(skip(state), name = "api_test_location")]
pub async fn test_location(State(state): State<AppState>) -> Response {
    match state.egress_location.execute().await {
        Ok(location) => {
            info!(ip = %location.ip, latency_ms = location.latency_ms, "Egress location resolved");
            (
                [
                    (header::CACHE_CONTROL, "public, max-age=60"),
                    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
                ],
                Json(LocationResponse {
                    message: "Server Location Test".to_string(),
                    ip: location.ip,
                    timestamp: chrono::Utc::now().to_rfc3339(),
                    status: "success".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "Egress location test failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
                Json(LocationFailure {
                    message: "Test failed".to_string(),
                    error: e.to_string(),
                    status: "error".to_string(),
                }),
            )
                .into_response()
        }
    }
}
