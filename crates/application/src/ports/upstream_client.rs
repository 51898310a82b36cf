use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use ferrous_doh_domain::{DohQuery, DomainError, ResolverEndpoint};
use futures::stream::{self, BoxStream, StreamExt};
use std::fmt;

/// Upstream body, streamed through to the client without buffering.
pub type ResponseBody = BoxStream<'static, Result<Bytes, DomainError>>;

pub struct UpstreamResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub content_length: Option<u64>,
    pub body: ResponseBody,
}

impl UpstreamResponse {
    /// Response with an in-memory body.
    pub fn from_bytes(status: u16, content_type: Option<&str>, body: impl Into<Bytes>) -> Self {
        let body: Bytes = body.into();
        Self {
            status,
            content_type: content_type.map(str::to_string),
            content_length: Some(body.len() as u64),
            body: stream::once(async move { Ok(body) }).boxed(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub async fn collect_body(mut self) -> Result<Bytes, DomainError> {
        let mut buf = BytesMut::new();
        while let Some(chunk) = self.body.next().await {
            buf.extend_from_slice(&chunk?);
        }
        Ok(buf.freeze())
    }
}

impl fmt::Debug for UpstreamResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamResponse")
            .field("status", &self.status)
            .field("content_type", &self.content_type)
            .field("content_length", &self.content_length)
            .finish_non_exhaustive()
    }
}

/// Sends one DoH query to one upstream, preserving the client's encoding.
///
/// Implementations report transport problems as
/// [`DomainError::TransportFailure`] and return every HTTP response,
/// successful or not, as `Ok`.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    async fn send(
        &self,
        endpoint: &ResolverEndpoint,
        query: &DohQuery,
    ) -> Result<UpstreamResponse, DomainError>;
}
