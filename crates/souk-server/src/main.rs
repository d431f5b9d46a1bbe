use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use souk_market::{Market, MarketConfig};
use souk_server::{ServerConfig, SoukServer};

#[derive(Parser)]
#[command(name = "souk", about = "Souk marketplace server", version)]
struct Cli {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// Directory holding the snapshot and text export.
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let market = Arc::new(Market::open(MarketConfig::in_dir(&cli.data_dir))?);
    let server = SoukServer::new(ServerConfig { bind_addr: cli.bind }, market);
    server.serve().await?;
    Ok(())
}
