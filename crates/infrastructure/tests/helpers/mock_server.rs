use axum::body::Bytes;
use axum::extract::Query;
use axum::http::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use std::collections::HashMap;
use std::time::Duration;
use tokio::net::TcpListener;

pub const DNS_MESSAGE: &str = "application/dns-message";

/// Serve `router` on an ephemeral loopback port and return its base URL.
pub async fn spawn_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A URL on a loopback port nothing listens on.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/dns-query", addr)
}

fn accepts_dns_message(headers: &HeaderMap) -> bool {
    headers.get(ACCEPT).and_then(|v| v.to_str().ok()) == Some(DNS_MESSAGE)
}

/// Echoes the `dns` parameter (GET) or the body (POST) back as the answer.
pub fn echo_upstream() -> Router {
    async fn echo_get(
        headers: HeaderMap,
        Query(params): Query<HashMap<String, String>>,
    ) -> impl IntoResponse {
        if !accepts_dns_message(&headers) {
            return (StatusCode::NOT_ACCEPTABLE, [(CONTENT_TYPE, "text/plain")], Bytes::new());
        }
        let dns = params.get("dns").cloned().unwrap_or_default();
        (StatusCode::OK, [(CONTENT_TYPE, DNS_MESSAGE)], Bytes::from(dns))
    }

    async fn echo_post(headers: HeaderMap, body: Bytes) -> impl IntoResponse {
        let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok());
        if content_type != Some(DNS_MESSAGE) || !accepts_dns_message(&headers) {
            return (StatusCode::UNSUPPORTED_MEDIA_TYPE, [(CONTENT_TYPE, "text/plain")], Bytes::new());
        }
        (StatusCode::OK, [(CONTENT_TYPE, DNS_MESSAGE)], body)
    }

    Router::new().route("/dns-query", get(echo_get).post(echo_post))
}

pub fn status_upstream(status: StatusCode) -> Router {
    Router::new().route(
        "/dns-query",
        get(move || async move { (status, "upstream says no") }),
    )
}

pub fn slow_upstream(delay: Duration) -> Router {
    Router::new().route(
        "/dns-query",
        get(move || async move {
            tokio::time::sleep(delay).await;
            (StatusCode::OK, [(CONTENT_TYPE, DNS_MESSAGE)], Bytes::from_static(b"late"))
        }),
    )
}

/// httpbin-style `/ip` that only answers the diagnostic user agent.
pub fn ip_echo_service(origin: &'static str) -> Router {
    Router::new().route(
        "/ip",
        get(move |headers: HeaderMap| async move {
            let agent = headers.get(USER_AGENT).and_then(|v| v.to_str().ok());
            if agent != Some("DoH-Test/1.0") {
                return (StatusCode::FORBIDDEN, Json(serde_json::json!({}))).into_response();
            }
            Json(serde_json::json!({ "origin": origin })).into_response()
        }),
    )
}

pub fn broken_ip_echo_service() -> Router {
    Router::new().route("/ip", get(|| async { "not json" }))
}
