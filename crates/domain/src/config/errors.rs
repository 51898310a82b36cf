/// Problems found while turning a TOML file into a runnable proxy config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {reason}")]
    FileRead { path: String, reason: String },

    #[error("Invalid TOML in config: {0}")]
    Parse(String),

    /// Parsed, but the routing, pool or listener settings are unusable.
    #[error("Invalid proxy configuration: {0}")]
    Validation(String),
}
