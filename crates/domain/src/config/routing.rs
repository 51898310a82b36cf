use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::resolver_endpoint::ResolverEndpoint;
use crate::routing::{RouteTarget, RoutingRule, RoutingTable};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct RoutingConfig {
    /// Resolver for unmatched and undecodable queries.
    /// When unset those queries rotate over the upstream pool.
    #[serde(default)]
    pub default_resolver: Option<String>,

    /// Evaluated in declaration order.
    #[serde(default)]
    pub rules: Vec<RoutingRuleConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RoutingRuleConfig {
    /// Matches itself and every subdomain.
    pub domain: String,

    pub resolver: String,
}

impl RoutingConfig {
    pub fn build_table(&self) -> Result<RoutingTable, DomainError> {
        let fallback = match &self.default_resolver {
            Some(url) => RouteTarget::Endpoint(url.parse::<ResolverEndpoint>()?),
            None => RouteTarget::DefaultPool,
        };

        let rules = self
            .rules
            .iter()
            .map(|rule| Ok(RoutingRule::new(&rule.domain, rule.resolver.parse()?)))
            .collect::<Result<Vec<_>, DomainError>>()?;

        Ok(RoutingTable::new(rules, fallback))
    }
}
