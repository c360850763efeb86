//! Ecoleta API - REST service for waste-collection points

use axum_helpers::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to PostgreSQL");

    let db =
        database::postgres::connect_from_config_with_retry(config.database.clone(), None).await?;

    database::postgres::run_migrations::<migration::Migrator>(&db, "ecoleta_api").await?;

    let state = AppState {
        config: config.clone(),
        db,
    };

    // Build the REST router: domain routes + uploads static files,
    // wrapped with tracing, CORS, and the OpenAPI doc UIs
    let api_routes = api::routes(&state);
    let router = create_router::<openapi::ApiDoc>(api_routes)
        .merge(health_router(config.app.clone()))
        .merge(api::ready_router(state.clone()));

    info!(
        "Starting Ecoleta API on port {} ({:?})",
        config.server.port, config.environment
    );

    create_app(router, &config.server).await?;

    info!("Ecoleta API shutdown complete");
    Ok(())
}
