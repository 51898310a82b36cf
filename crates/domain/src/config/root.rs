use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::net::IpAddr;

use super::diagnostics::DiagnosticsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::routing::RoutingConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;
use crate::resolver_endpoint::{ResolverEndpoint, ResolverPool};

const LOCAL_CONFIG_PATH: &str = "ferrous-doh.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-doh/config.toml";

/// Paths served by the front end itself.
const RESERVED_PATHS: [&str; 3] = ["/", "/health", "/test-location"];

/// Main configuration structure for Ferrous DoH
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP listener configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Default resolver pool and outbound client settings
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Domain-to-resolver rules
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Egress location diagnostic
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-doh.toml in current directory
    /// 3. /etc/ferrous-doh/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead {
                path: path.to_string(),
                reason: e.to_string(),
            })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("Port cannot be 0".to_string()));
        }

        if self.server.bind_address.parse::<IpAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "Bind address '{}' is not an IP address",
                self.server.bind_address
            )));
        }

        if self.upstream.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Upstream timeout must be at least 1 second".to_string(),
            ));
        }

        if !self.server.doh_path.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "DoH path '{}' must start with '/'",
                self.server.doh_path
            )));
        }

        if RESERVED_PATHS.contains(&self.server.doh_path.as_str()) {
            return Err(ConfigError::Validation(format!(
                "DoH path '{}' collides with a built-in endpoint",
                self.server.doh_path
            )));
        }

        self.resolver_pool()?;

        if let Some(url) = &self.routing.default_resolver {
            url.parse::<ResolverEndpoint>()
                .map_err(|e| ConfigError::Validation(format!("default_resolver: {}", e)))?;
        }

        let mut seen = HashSet::new();
        for rule in &self.routing.rules {
            let key = rule.domain.trim().to_lowercase();
            if key.is_empty() {
                return Err(ConfigError::Validation(
                    "Routing rule with empty domain".to_string(),
                ));
            }
            if !seen.insert(key) {
                return Err(ConfigError::Validation(format!(
                    "Duplicate routing rule for '{}'",
                    rule.domain
                )));
            }
            rule.resolver.parse::<ResolverEndpoint>().map_err(|e| {
                ConfigError::Validation(format!("rule '{}': {}", rule.domain, e))
            })?;
        }

        Ok(())
    }

    /// The default pool, parsed.
    pub fn resolver_pool(&self) -> Result<ResolverPool, ConfigError> {
        if self.upstream.servers.is_empty() {
            return Err(ConfigError::Validation(
                "No upstream servers configured".to_string(),
            ));
        }
        ResolverPool::parse(&self.upstream.servers)
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}
