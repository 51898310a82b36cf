use crate::handlers;
use crate::middleware::cors_preflight;
use crate::state::AppState;
use axum::{middleware, routing::get, Router};

/// Full HTTP surface. `doh_path` must start with `/`.
pub fn create_routes(state: AppState, doh_path: &str) -> Router {
    Router::new()
        .route(
            doh_path,
            get(handlers::doh_get)
                .post(handlers::doh_post)
                .fallback(handlers::method_not_allowed),
        )
        .route("/", get(handlers::health_check))
        .route("/health", get(handlers::health_check))
        .route("/test-location", get(handlers::test_location))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(cors_preflight))
        .with_state(state)
}
