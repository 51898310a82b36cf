use crate::services::{ForwardedResponse, UpstreamSelector};
use ferrous_doh_domain::{DohQuery, DomainError, RouteTarget, RoutingTable};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Decode, route, select and forward one DoH query.
pub struct ForwardDohQueryUseCase {
    routing: Arc<RoutingTable>,
    selector: Arc<UpstreamSelector>,
}

impl ForwardDohQueryUseCase {
    pub fn new(routing: Arc<RoutingTable>, selector: Arc<UpstreamSelector>) -> Self {
        Self { routing, selector }
    }

    pub async fn execute(&self, query: &DohQuery) -> Result<ForwardedResponse, DomainError> {
        let start = Instant::now();

        let domain = query.question_name();
        let target = self.routing.resolve(domain.as_ref());
        let primary = self.selector.select_primary(&target);

        debug!(
            method = query.method_name(),
            domain = domain.as_ref().map_or("<unknown>", |d| d.as_str()),
            routed = matches!(target, RouteTarget::Endpoint(_)),
            primary = %primary,
            "Routing DoH query"
        );

        match self.selector.dispatch(primary, query).await {
            Ok(forwarded) => {
                debug!(
                    upstream = %forwarded.endpoint,
                    status = forwarded.response.status,
                    fanned_out = forwarded.fanned_out,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "DoH query forwarded"
                );
                Ok(forwarded)
            }
            Err(e) => {
                warn!(
                    domain = domain.as_ref().map_or("<unknown>", |d| d.as_str()),
                    error = %e,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "DoH query failed"
                );
                Err(e)
            }
        }
    }

    pub fn routing(&self) -> &RoutingTable {
        &self.routing
    }

    pub fn selector(&self) -> &UpstreamSelector {
        &self.selector
    }
}
