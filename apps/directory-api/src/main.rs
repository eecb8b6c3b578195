//! User Directory API - REST server over an in-memory user collection

use axum::Router;
use axum_helpers::server::{create_app, create_router, health_router};
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

    info!(
        id_strategy = %config.users.id_strategy,
        seed = config.users.seed,
        "Starting {} v{}",
        config.app.name,
        config.app.version
    );

    let state = AppState::new(config);
    let router = app(&state)?;

    create_app(router, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("User Directory API shutdown complete");
    Ok(())
}

/// API routes and docs behind the shared middleware, plus `/health`
fn app(state: &AppState) -> eyre::Result<Router> {
    let api_routes = api::routes(state);
    let router = create_router::<openapi::ApiDoc>(api_routes, &state.config.cors)?;
    Ok(router.merge(health_router(state.config.app)))
}
