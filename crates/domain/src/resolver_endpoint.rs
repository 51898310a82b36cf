use crate::errors::DomainError;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Base URL of an upstream DoH resolver. Compared by exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolverEndpoint(Arc<str>);

impl ResolverEndpoint {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn hostname(&self) -> &str {
        let rest = self
            .0
            .strip_prefix("https://")
            .or_else(|| self.0.strip_prefix("http://"))
            .unwrap_or(&self.0);
        rest.split(['/', '?']).next().unwrap_or(rest)
    }
}

impl FromStr for ResolverEndpoint {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let rest = s
            .strip_prefix("https://")
            .or_else(|| s.strip_prefix("http://"))
            .ok_or_else(|| {
                DomainError::InvalidEndpoint(format!(
                    "'{}'. Expected an http:// or https:// URL",
                    s
                ))
            })?;

        let host = rest.split(['/', '?']).next().unwrap_or_default();
        if host.is_empty() {
            return Err(DomainError::InvalidEndpoint(format!(
                "'{}' has no host",
                s
            )));
        }
        if rest.contains('?') {
            return Err(DomainError::InvalidEndpoint(format!(
                "'{}' must not carry a query string",
                s
            )));
        }

        Ok(Self(s.into()))
    }
}

impl fmt::Display for ResolverEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered set of interchangeable resolvers.
///
/// Order is the round-robin sequence and the fan-out scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverPool {
    endpoints: Arc<[ResolverEndpoint]>,
}

impl ResolverPool {
    pub fn new(endpoints: Vec<ResolverEndpoint>) -> Result<Self, DomainError> {
        if endpoints.is_empty() {
            return Err(DomainError::ConfigError(
                "Resolver pool needs at least one endpoint".into(),
            ));
        }
        Ok(Self {
            endpoints: endpoints.into(),
        })
    }

    pub fn parse<S: AsRef<str>>(urls: &[S]) -> Result<Self, DomainError> {
        let endpoints = urls
            .iter()
            .map(|u| u.as_ref().parse())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(endpoints)
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ResolverEndpoint> {
        self.endpoints.get(index)
    }

    pub fn endpoints(&self) -> &[ResolverEndpoint] {
        &self.endpoints
    }

    /// Every member except `tried`, in declared order.
    pub fn others<'a>(
        &'a self,
        tried: &'a ResolverEndpoint,
    ) -> impl Iterator<Item = &'a ResolverEndpoint> + 'a {
        self.endpoints.iter().filter(move |e| *e != tried)
    }
}
