//! Proteogel Web Server
//!
//! Run with: cargo run -p proteogel-web

use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = proteogel_web::config::ServerConfig::from_env();
    info!(?config, "Starting Proteogel Web Server...");

    let state = proteogel_web::state::AppState::new(&config).await?;
    let app = proteogel_web::router::build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
