//! Talos demo app entry point.
//!
//! Initializes tracing, resolves the version from the environment, compiles the
//! status page template, sets up the Axum router and serves it on port 8080.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use talos_demo::config::{AppConfig, DEFAULT_LOG_FILTER};
use talos_demo::server::start_server;
use talos_demo::templates::init_templates;
use talos_demo::{create_router, AppState};

/// Talos demo app: status page and liveness probe
#[derive(Parser, Debug)]
#[command(name = "talos-demo", version, about)]
struct Args {}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _args = Args::parse();

    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Read once; immutable for the life of the process
    let config = AppConfig::from_env();

    let tera = init_templates()?;

    let state = AppState::new(config.clone(), tera);
    let app = create_router(state);

    start_server(app, &config).await?;

    Ok(())
}
