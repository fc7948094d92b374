//! Items API - REST server over the fixed in-memory catalog

use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    // Build REST router over the seeded catalog
    let api_routes = api::routes();
    let router = create_router::<openapi::ApiDoc>(api_routes);
    let app = router.merge(health_router(config.app));

    info!("Starting Items API on port {}", config.server.port);

    create_app(app, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Items API shutdown complete");
    Ok(())
}
