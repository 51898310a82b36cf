use ferrous_doh_api::AppState;
use ferrous_doh_application::services::UpstreamSelector;
use ferrous_doh_application::use_cases::{ForwardDohQueryUseCase, GetEgressLocationUseCase};
use ferrous_doh_domain::Config;
use ferrous_doh_infrastructure::diagnostics::HttpIpEchoClient;
use ferrous_doh_infrastructure::dns::HttpsUpstreamClient;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct Services {
    pub forward_query: Arc<ForwardDohQueryUseCase>,
    pub egress_location: Arc<GetEgressLocationUseCase>,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let timeout = Duration::from_secs(config.upstream.timeout_secs);

        let pool = config.resolver_pool()?;
        let routing = Arc::new(config.routing.build_table()?);
        let client = Arc::new(HttpsUpstreamClient::new(
            timeout,
            config.upstream.pool_max_idle_per_host,
        )?);

        info!(
            pool = ?pool.endpoints().iter().map(|e| e.as_str()).collect::<Vec<_>>(),
            rules = routing.rules().len(),
            default = ?routing.fallback(),
            "Upstream routing ready"
        );

        let selector = Arc::new(UpstreamSelector::new(pool, client));
        let ip_echo = Arc::new(HttpIpEchoClient::new(
            config.diagnostics.ip_echo_url.clone(),
            timeout,
        )?);

        Ok(Self {
            forward_query: Arc::new(ForwardDohQueryUseCase::new(routing, selector)),
            egress_location: Arc::new(GetEgressLocationUseCase::new(ip_echo)),
        })
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            forward_query: self.forward_query.clone(),
            egress_location: self.egress_location.clone(),
        }
    }
}
