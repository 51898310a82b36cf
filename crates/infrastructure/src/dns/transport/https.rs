//! DNS-over-HTTPS upstream transport (RFC 8484)
//!
//! Queries are relayed in the encoding the client used:
//!
//! ```text
//! GET /dns-query?dns=<base64url> HTTP/2
//! Accept: application/dns-message
//!
//! POST /dns-query HTTP/2
//! Content-Type: application/dns-message
//! Accept: application/dns-message
//!
//! <raw DNS message bytes>
//! ```
//!
//! The response body is handed back as a stream so it can be piped to the
//! client without buffering.

use async_trait::async_trait;
use ferrous_doh_application::ports::{UpstreamClient, UpstreamResponse};
use ferrous_doh_domain::{DohQuery, DomainError, ResolverEndpoint, DNS_MESSAGE_CONTENT_TYPE};
use futures::StreamExt;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::time::Duration;
use tracing::debug;

/// Pooled HTTP/2 client shared by every upstream.
pub struct HttpsUpstreamClient {
    client: reqwest::Client,
}

impl HttpsUpstreamClient {
    pub fn new(timeout: Duration, pool_max_idle_per_host: usize) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .pool_max_idle_per_host(pool_max_idle_per_host)
            .build()
            .map_err(|e| {
                DomainError::ConfigError(format!("Failed to build upstream HTTP client: {}", e))
            })?;
        Ok(Self { client })
    }
}

fn transport_failure(endpoint: &ResolverEndpoint, e: reqwest::Error) -> DomainError {
    let reason = if e.is_timeout() {
        format!("timed out: {}", e)
    } else {
        e.to_string()
    };
    DomainError::TransportFailure {
        endpoint: endpoint.to_string(),
        reason,
    }
}

#[async_trait]
impl UpstreamClient for HttpsUpstreamClient {
    async fn send(
        &self,
        endpoint: &ResolverEndpoint,
        query: &DohQuery,
    ) -> Result<UpstreamResponse, DomainError> {
        let request = match query {
            DohQuery::Get { dns } => self
                .client
                .get(endpoint.as_str())
                .query(&[("dns", dns.as_ref())]),
            DohQuery::Post { body } => self
                .client
                .post(endpoint.as_str())
                .header(CONTENT_TYPE, DNS_MESSAGE_CONTENT_TYPE)
                .body(body.clone()),
        };

        debug!(
            url = %endpoint,
            method = query.method_name(),
            "Sending DoH query upstream"
        );

        let response = request
            .header(ACCEPT, DNS_MESSAGE_CONTENT_TYPE)
            .send()
            .await
            .map_err(|e| transport_failure(endpoint, e))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let content_length = response.content_length();

        debug!(
            url = %endpoint,
            status,
            content_length,
            "DoH response headers received"
        );

        let endpoint = endpoint.clone();
        let body = response
            .bytes_stream()
            .map(move |chunk| chunk.map_err(|e| transport_failure(&endpoint, e)))
            .boxed();

        Ok(UpstreamResponse {
            status,
            content_type,
            content_length,
            body,
        })
    }
}
