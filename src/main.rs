//! roomtoken: issues signed LiveKit room-join tokens.
//! Used by: binary entrypoint.

pub mod config;
pub mod console;
pub mod error;
pub mod handlers;
pub mod ratelimit;
pub mod server;
pub mod state;
pub mod telemetry;
pub mod token;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::Config::from_env()?;
    let state = state::build_state(&config);
    let addr = config.bind_addr();

    console::print_banner();
    console::print_startup(&config);
    tracing::info!(
        addr = %addr,
        credentials = config.credentials.is_some(),
        rate_limit_per_min = config.rate_limit_per_min,
        "starting roomtoken"
    );

    server::run(state, &addr).await?;
    Ok(())
}
