use crate::ports::{UpstreamClient, UpstreamResponse};
use crate::services::RotationCursor;
use ferrous_doh_domain::{DohQuery, DomainError, ResolverEndpoint, ResolverPool, RouteTarget};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// The upstream answer chosen for a query.
#[derive(Debug)]
pub struct ForwardedResponse {
    pub response: UpstreamResponse,
    pub endpoint: ResolverEndpoint,
    /// `true` when the primary failed and the answer came from fan-out.
    pub fanned_out: bool,
}

/// Picks the primary upstream and fans out over the pool when it fails.
pub struct UpstreamSelector {
    pool: ResolverPool,
    cursor: RotationCursor,
    client: Arc<dyn UpstreamClient>,
}

impl UpstreamSelector {
    pub fn new(pool: ResolverPool, client: Arc<dyn UpstreamClient>) -> Self {
        Self {
            pool,
            cursor: RotationCursor::new(),
            client,
        }
    }

    pub fn pool(&self) -> &ResolverPool {
        &self.pool
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor.position()
    }

    /// Routed endpoints are used as-is; only the default pool rotates.
    pub fn select_primary(&self, target: &RouteTarget) -> ResolverEndpoint {
        match target {
            RouteTarget::Endpoint(endpoint) => endpoint.clone(),
            RouteTarget::DefaultPool => {
                let index = self.cursor.advance(self.pool.len());
                self.pool.endpoints()[index].clone()
            }
        }
    }

    /// Try `primary`, then every other pool member concurrently.
    ///
    /// Fan-out waits for all attempts to settle and then takes the first
    /// success in pool order, so its latency is that of the slowest member.
    pub async fn dispatch(
        &self,
        primary: ResolverEndpoint,
        query: &DohQuery,
    ) -> Result<ForwardedResponse, DomainError> {
        match self.attempt(&primary, query).await {
            Ok(response) => {
                return Ok(ForwardedResponse {
                    response,
                    endpoint: primary,
                    fanned_out: false,
                });
            }
            Err(e) => {
                warn!(endpoint = %primary, error = %e, "Primary upstream failed");
            }
        }

        if self.pool.len() < 2 {
            error!(endpoint = %primary, "No other upstreams to fan out to");
            return Err(DomainError::AllUpstreamsFailed { attempts: 1 });
        }

        self.fan_out(&primary, query).await
    }

    async fn fan_out(
        &self,
        tried: &ResolverEndpoint,
        query: &DohQuery,
    ) -> Result<ForwardedResponse, DomainError> {
        let candidates: Vec<&ResolverEndpoint> = self.pool.others(tried).collect();
        let attempts = 1 + candidates.len();

        info!(
            candidates = candidates.len(),
            failed = %tried,
            "Fanning out to remaining upstreams"
        );

        let results = join_all(candidates.iter().map(|e| self.attempt(e, query))).await;

        let mut winner: Option<ForwardedResponse> = None;
        for (endpoint, result) in candidates.into_iter().zip(results) {
            match result {
                Ok(response) if winner.is_none() => {
                    winner = Some(ForwardedResponse {
                        response,
                        endpoint: endpoint.clone(),
                        fanned_out: true,
                    });
                }
                Ok(_) => {
                    debug!(endpoint = %endpoint, "Discarding later successful response");
                }
                Err(e) => {
                    warn!(endpoint = %endpoint, error = %e, "Fan-out attempt failed");
                }
            }
        }

        winner.ok_or_else(|| {
            error!(attempts, "All upstreams failed");
            DomainError::AllUpstreamsFailed { attempts }
        })
    }

    async fn attempt(
        &self,
        endpoint: &ResolverEndpoint,
        query: &DohQuery,
    ) -> Result<UpstreamResponse, DomainError> {
        let start = Instant::now();
        let response = self.client.send(endpoint, query).await?;

        if !response.is_success() {
            return Err(DomainError::UpstreamRejection {
                endpoint: endpoint.to_string(),
                status: response.status,
            });
        }

        debug!(
            endpoint = %endpoint,
            status = response.status,
            latency_ms = start.elapsed().as_millis() as u64,
            "Upstream responded"
        );
        Ok(response)
    }
}
