use clap::Parser;
use colored::*;
use oldest_repos_server::api::{create_router, AppState, RouterOptions};
use oldest_repos_server::cli::Cli;
use oldest_repos_server::github::GitHubClient;
use std::time::Duration;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let cli = Cli::parse();

    println!("{}", "Oldest Repositories Server".bold().green());
    println!("{}\n", "=".repeat(50).dimmed());

    let github = GitHubClient::with_options(
        &cli.github_api_url,
        Duration::from_secs(cli.request_timeout),
    )?;

    let options = RouterOptions {
        api_docs: cli.is_development(),
        https_port: cli.https_port,
    };

    if options.api_docs {
        println!("{}", "Development mode: API docs at /api-docs/openapi.json".yellow());
    }
    if options.https_port.is_none() {
        warn!("Failed to determine the https port for redirect.");
    }

    let app = create_router(AppState::new(github), options);

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Listening on http://{}", listener.local_addr()?);
    println!("\nPress Ctrl+C to stop the server\n");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    println!("✅ Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    println!("\n🛑 Shutting down server...");
}
