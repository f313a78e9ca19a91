use anyhow::Context;
use nepse::Nepse;
use nepse_api::config::Config;
use nepse_api::rate_limit::TokenBucket;
use nepse_api::router::create_router;
use nepse_api::state::AppState;
use std::net::SocketAddr;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting NEPSE API service");

    let config = Config::load("config.toml")?;

    let client = Nepse::new(&config.upstream).context("building upstream client")?;
    let bucket = TokenBucket::new(config.rate_limit.capacity, config.rate_limit.refill_rate);
    let state = AppState::new(client, bucket);

    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("invalid server address")?;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
