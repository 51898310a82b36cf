pub mod diagnostics;
pub mod errors;
pub mod logging;
pub mod root;
pub mod routing;
pub mod server;
pub mod upstream;

pub use diagnostics::DiagnosticsConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use routing::{RoutingConfig, RoutingRuleConfig};
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;
