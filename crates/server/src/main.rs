mod bootstrap;
mod health;
mod routes;

use anyhow::Result;
use fundline_core::config::{AppConfig, LoadOptions};

fn init_logging(config: &AppConfig) {
    use fundline_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    run().await
}

pub async fn run() -> Result<()> {
    // Load config and initialize logging before any other operations
    let config = AppConfig::load(LoadOptions::default())?;
    init_logging(&config);

    // Bootstrap using the same config we already loaded
    let app = bootstrap::bootstrap_with_config(config)?;

    let address = format!("{}:{}", app.config.server.bind_address, app.config.server.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;

    tracing::info!(
        event_name = "system.server.started",
        correlation_id = "bootstrap",
        bind_address = %address,
        tool_count = app.runtime.registry().len(),
        "fundline-server started"
    );

    let shutdown_grace = std::time::Duration::from_secs(app.config.server.graceful_shutdown_secs);
    let router = routes::router(app.runtime.clone()).merge(health::router(app.runtime.clone()));
    axum::serve(listener, router).with_graceful_shutdown(wait_for_shutdown(shutdown_grace)).await?;

    tracing::info!(
        event_name = "system.server.stopping",
        correlation_id = "shutdown",
        "fundline-server stopping"
    );

    Ok(())
}

async fn wait_for_shutdown(grace: std::time::Duration) {
    let _ = tokio::signal::ctrl_c().await;

    // In-flight connections get `server.graceful_shutdown_secs` to drain
    // before the process exits regardless.
    tokio::spawn(async move {
        tokio::time::sleep(grace).await;
        std::process::exit(0);
    });
}
