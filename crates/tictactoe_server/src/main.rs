//! Tic-tac-toe HTTP server binary.

use anyhow::Result;
use clap::Parser;
use tictactoe_server::{Cli, Command, ENDPOINTS, ServerConfig, SharedEngine, router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { port, host, config } => {
            init_tracing();
            let config = ServerConfig::resolve(config.as_deref(), host, port)?;
            run_http_server(config).await
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tictactoe_server=debug")),
        )
        .init();
}

/// Run the HTTP game server until Ctrl-C.
async fn run_http_server(config: ServerConfig) -> Result<()> {
    let address = config.bind_address();
    let app = router(SharedEngine::new());

    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(%address, "Starting Tic Tac Toe server");
    info!("API endpoints:");
    for (method, path, purpose) in ENDPOINTS {
        info!("- {method} {path} - {purpose}");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
