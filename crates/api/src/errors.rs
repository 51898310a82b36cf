use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use ferrous_doh_domain::DomainError;
use tracing::error;

/// DoH clients expect short plain-text error bodies.
pub struct ApiError(pub DomainError);

impl ApiError {
    pub fn bad_request(message: &str) -> Self {
        Self(DomainError::InvalidRequest(message.to_string()))
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            DomainError::InvalidRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),

            DomainError::AllUpstreamsFailed { .. }
            | DomainError::TransportFailure { .. }
            | DomainError::UpstreamRejection { .. } => (
                StatusCode::BAD_GATEWAY,
                [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
                "DNS resolution failed",
            )
                .into_response(),

            other => {
                error!(error = %other, "Unexpected error while serving request");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}
