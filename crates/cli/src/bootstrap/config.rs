use ferrous_doh_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Logging is configured from the loaded file, so this runs after `init_logging`.
pub fn log_config(config_path: Option<&str>, config: &Config) {
    let source = config_path
        .map(str::to_string)
        .or_else(Config::get_config_path)
        .unwrap_or_else(|| "default".to_string());

    info!(
        config_file = %source,
        port = config.server.port,
        bind = %config.server.bind_address,
        doh_path = %config.server.doh_path,
        upstreams = config.upstream.servers.len(),
        rules = config.routing.rules.len(),
        "Configuration loaded"
    );
}
