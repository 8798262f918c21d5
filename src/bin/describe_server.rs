use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use ndel_backend::config::Config;
use ndel_backend::describe;
use ndel_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ndel_backend=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::load_or_default();
    let app_state = AppState::new(config.clone()).await?;

    let app = Router::new()
        .merge(describe::create_routes())
        .layer(TraceLayer::new_for_http())
        // Allow the web frontend to call this
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let addr = SocketAddr::new(config.host.parse()?, config.port);
    info!("Starting NDEL describe server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
