//! Roster CLI and REST API entry point.
//!
//! Binary name: `roster`
//!
//! Parses CLI arguments, loads configuration and the character dataset, then
//! dispatches to the appropriate command handler or starts the REST API server.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use roster_infra::config::load_server_config;
use roster_infra::filesystem::resolve_data_dir;
use roster_observe::tracing_setup::{bootstrap_tracing, init_tracing, shutdown_tracing};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need config or data
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "roster", &mut std::io::stdout());
        return Ok(());
    }

    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,roster=debug",
        _ => "trace",
    };

    let data_dir = resolve_data_dir();
    let mut config = {
        let _guard = bootstrap_tracing(filter);
        load_server_config(&data_dir).await
    };

    if let Some(dataset) = cli.dataset.clone() {
        config.dataset_path = Some(dataset);
    }
    if let Commands::Serve { port, host } = &cli.command {
        if let Some(port) = port {
            config.port = *port;
        }
        if let Some(host) = host {
            config.host = host.clone();
        }
    }

    init_tracing(filter, config.enable_otel).map_err(|e| anyhow::anyhow!(e))?;

    let result = run(cli, data_dir, config).await;
    shutdown_tracing();
    result
}

async fn run(
    cli: Cli,
    data_dir: std::path::PathBuf,
    config: roster_types::config::ServerConfig,
) -> anyhow::Result<()> {
    let state = AppState::init(data_dir, config).await?;

    match cli.command {
        Commands::List => {
            cli::character::list_characters(&state, cli.json)?;
        }

        Commands::Show { slug } => {
            cli::character::show_character(&state, &slug, cli.json)?;
        }

        Commands::Avatar { slug, color } => {
            cli::character::print_avatar(&slug, color.as_deref());
        }

        Commands::Status => {
            cli::status::status(&state, cli.json)?;
        }

        Commands::Serve { .. } => {
            let addr = format!("{}:{}", state.config.host, state.config.port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            tracing::info!(%addr, characters = state.character_service.count(), "Server listening");
            if !cli.quiet {
                println!(
                    "  {} Roster API listening on {}",
                    console::style("⚡").bold(),
                    console::style(format!("http://{addr}")).cyan()
                );
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            if !cli.quiet {
                println!("\n  Server stopped.");
            }
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
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

    tracing::info!("Shutdown signal received");
}
