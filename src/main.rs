//! Development server for the novel reading front-end.
//!
//! Serves the SPA shell for every registered route and forwards `/api`
//! traffic to the configured upstream origin, so local page code can use
//! the same relative base URL it uses in production.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use novel_front::config;
use novel_front::lifecycle::Shutdown;
use novel_front::observability::logging;
use novel_front::server::DevServer;

#[derive(Parser)]
#[command(name = "novel-front", about = "Dev server for the novel reading front-end")]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when absent.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    logging::init("novel_front=debug,tower_http=debug");

    let mut config = config::load_or_default(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.server.bind_address = bind;
    }

    tracing::info!(
        bind_address = %config.server.bind_address,
        base_url = %config.client.resolved_base_url(),
        upstream = %config.proxy.origin,
        path_prefix = %config.proxy.path_prefix,
        "configuration loaded"
    );

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "listening for connections");

    let shutdown = Shutdown::new();
    let server = DevServer::new(config)?;
    server.run(listener, shutdown.signal()).await?;

    tracing::info!("shutdown complete");
    Ok(())
}
