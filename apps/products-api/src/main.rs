//! Products API - REST server for the product catalog

use axum_helpers::server::{create_production_app, create_router, health_router};
use clap::Parser;
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod bootstrap;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[derive(Parser)]
#[command(name = "products-api")]
#[command(about = "Product catalog REST API")]
struct Cli {
    /// Drop and recreate the products schema, then exit
    #[arg(long)]
    clear: bool,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    // Lazy pool: creation never waits for PostgreSQL
    let db = database::postgres::connect_lazy(&config.database)
        .await
        .map_err(|e| eyre::eyre!("Invalid database configuration: {}", e))?;

    if cli.clear {
        bootstrap::clear_data(&db)
            .await
            .map_err(|e| eyre::eyre!("Failed to clear data: {}", e))?;
        database::postgres::close(db).await;
        return Ok(());
    }

    bootstrap::connect_db(&db, config.database.retry_config()).await;

    let state = AppState { config, db };

    let api_routes = api::routes(&state);
    let router = create_router::<openapi::ApiDoc>(api_routes, &state.config.cors)?;

    // - /health: liveness with app name/version
    // - /ready: readiness with a database ping
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()));

    info!(
        address = %state.config.server.address(),
        "Starting Products API"
    );

    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        database::postgres::close(state.db.clone()),
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
