use anyhow::{Context, Result};
use neuracure_backend::config::Config;
use neuracure_backend::{create_router, initialize_backend};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; real deployments set the variables directly
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    info!("Serving frontend from {}", config.frontend_dist.display());
    let addr = config.bind_addr;

    let app_state = initialize_backend(config)?;
    let app = create_router(app_state)?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
