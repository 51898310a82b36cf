use clap::Parser;
use ferrous_doh_domain::CliOverrides;
use std::net::{IpAddr, SocketAddr};
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "ferrous-doh")]
#[command(version = "0.1.0")]
#[command(about = "Ferrous DoH - DNS-over-HTTPS forwarding proxy with domain routing")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// HTTP listen port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Ferrous DoH v{}", env!("CARGO_PKG_VERSION"));
    bootstrap::log_config(cli.config.as_deref(), &config);

    let services = di::Services::new(&config)?;

    let bind_ip: IpAddr = config.server.bind_address.parse()?;
    let bind_addr = SocketAddr::new(bind_ip, config.server.port);

    server::start_web_server(bind_addr, services.app_state(), &config.server.doh_path).await?;

    info!("Server shutdown complete");
    Ok(())
}
