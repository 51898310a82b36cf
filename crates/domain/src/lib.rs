//! Ferrous DoH Domain Layer
pub mod config;
pub mod dns_message;
pub mod doh_query;
pub mod errors;
pub mod resolver_endpoint;
pub mod routing;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_message::{DnsMessage, DomainName};
pub use doh_query::{DohQuery, DNS_MESSAGE_CONTENT_TYPE};
pub use errors::DomainError;
pub use resolver_endpoint::{ResolverEndpoint, ResolverPool};
pub use routing::{RouteTarget, RoutingRule, RoutingTable};
