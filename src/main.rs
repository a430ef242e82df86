use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mock_commerce_api::auth::TokenCodec;
use mock_commerce_api::{app, config, AppState};

#[derive(Debug, Parser)]
#[command(name = "mock-commerce-api")]
#[command(about = "Mock marketplace backend serving in-memory fixtures")]
#[command(version)]
struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0", help = "Address to bind")]
    host: String,

    #[arg(long, env = "PORT", default_value_t = 5000, help = "Port to listen on")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before the config singleton is first read
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = ServerArgs::parse();
    let config = config::config();
    tracing::info!("Starting Mock Commerce API in {:?} mode", config.environment);

    let codec = TokenCodec::from_config(&config.security)
        .context("a JWT secret is required outside development (set SECURITY_JWT_SECRET)")?;
    let state = AppState::seeded(codec);

    let bind_addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Mock Commerce API listening on http://{}", bind_addr);

    axum::serve(listener, app(state)).await.context("server error")?;
    Ok(())
}
