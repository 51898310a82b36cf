//! Domain-aware choice of upstream resolver.

use crate::dns_message::DomainName;
use crate::resolver_endpoint::ResolverEndpoint;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingRule {
    pub domain: String,
    pub endpoint: ResolverEndpoint,
}

impl RoutingRule {
    /// The key is trimmed and lowercased, matching config validation.
    pub fn new(domain: &str, endpoint: ResolverEndpoint) -> Self {
        Self {
            domain: domain.trim().to_lowercase(),
            endpoint,
        }
    }
}

/// Where a query should go before any pool rotation happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    Endpoint(ResolverEndpoint),
    DefaultPool,
}

/// Exact and suffix matching over an ordered rule list.
///
/// Suffix matches are tried in declaration order and the first hit wins, so
/// with overlapping keys an earlier, shorter key shadows a later, longer one.
#[derive(Debug, Clone)]
pub struct RoutingTable {
    rules: Vec<RoutingRule>,
    exact: FxHashMap<String, usize>,
    fallback: RouteTarget,
}

impl RoutingTable {
    /// Duplicate keys keep the first declaration.
    pub fn new(rules: Vec<RoutingRule>, fallback: RouteTarget) -> Self {
        let mut exact = FxHashMap::default();
        for (index, rule) in rules.iter().enumerate() {
            exact.entry(rule.domain.clone()).or_insert(index);
        }
        Self {
            rules,
            exact,
            fallback,
        }
    }

    pub fn resolve(&self, domain: Option<&DomainName>) -> RouteTarget {
        let Some(domain) = domain else {
            return self.fallback.clone();
        };
        let name = domain.as_str();

        if let Some(&index) = self.exact.get(name) {
            return RouteTarget::Endpoint(self.rules[index].endpoint.clone());
        }

        self.rules
            .iter()
            .find(|rule| is_strict_subdomain(name, &rule.domain))
            .map(|rule| RouteTarget::Endpoint(rule.endpoint.clone()))
            .unwrap_or_else(|| self.fallback.clone())
    }

    pub fn rules(&self) -> &[RoutingRule] {
        &self.rules
    }

    pub fn fallback(&self) -> &RouteTarget {
        &self.fallback
    }
}

fn is_strict_subdomain(name: &str, key: &str) -> bool {
    name.len() > key.len()
        && name.ends_with(key)
        && name.as_bytes()[name.len() - key.len() - 1] == b'.'
}
