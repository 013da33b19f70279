//! chirp-ui showcase server

use anyhow::{Context, Result};
use chirp_ui::observability;
use chirp_ui_showcase::{router, AppState, ShowcaseConfig};
use clap::Parser;
use console::style;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chirp-ui-showcase")]
#[command(version)]
#[command(about = "Component showcase for chirp-ui", long_about = None)]
struct Cli {
    /// Configuration file (skips the default search path)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Interface to bind, overrides `server.host`
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overrides `server.port`
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    observability::init()?;

    let mut config = ShowcaseConfig::load(cli.config.as_deref())?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let address = config.server.bind_address();
    let app = router(AppState::new(config)?);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    println!(
        "{} {}",
        style("Serving").green().bold(),
        style(format!("http://{address}")).cyan()
    );
    tracing::info!(%address, "showcase listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("showcase stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
