use crate::{errors::ApiError, state::AppState};
use axum::{
    body::{Body, Bytes},
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use ferrous_doh_application::ports::UpstreamResponse;
use ferrous_doh_domain::{DohQuery, DNS_MESSAGE_CONTENT_TYPE};
use tracing::{debug, instrument};

const RELAY_CACHE_CONTROL: &str = "public, max-age=300";

#[instrument(skip(state, params), name = "doh_get")]
pub async fn doh_get(
    State(state): State<AppState>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params.map_err(|e| {
        debug!(error = %e, "Unreadable query string");
        ApiError::bad_request("Missing dns parameter")
    })?;

    // First occurrence wins when the parameter is repeated.
    let dns = params
        .into_iter()
        .find(|(key, _)| key == "dns")
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ApiError::bad_request("Missing dns parameter"))?;

    forward(&state, DohQuery::get(dns)).await
}

#[instrument(skip(state, headers, body), name = "doh_post", fields(body_len = body.len()))]
pub async fn doh_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    if content_type != Some(DNS_MESSAGE_CONTENT_TYPE) {
        debug!(content_type = ?content_type, "Rejecting POST with wrong content type");
        return Err(ApiError::bad_request("Invalid content type"));
    }

    forward(&state, DohQuery::post(body)).await
}

async fn forward(state: &AppState, query: DohQuery) -> Result<Response, ApiError> {
    let forwarded = state.forward_query.execute(&query).await?;
    Ok(relay(forwarded.response))
}

/// Pipe the upstream body through with a fixed header set.
fn relay(upstream: UpstreamResponse) -> Response {
    let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::OK);

    let mut headers = HeaderMap::new();
    let content_type = upstream
        .content_type
        .as_deref()
        .and_then(|ct| HeaderValue::from_str(ct).ok())
        .unwrap_or_else(|| HeaderValue::from_static(DNS_MESSAGE_CONTENT_TYPE));
    headers.insert(header::CONTENT_TYPE, content_type);
    if let Some(length) = upstream.content_length {
        headers.insert(header::CONTENT_LENGTH, HeaderValue::from(length));
    }
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(RELAY_CACHE_CONTROL),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );

    (status, headers, Body::from_stream(upstream.body)).into_response()
}
