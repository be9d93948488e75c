use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod constants;
mod depth;
mod feeds;
mod html_template;
mod markers;
mod server;

use server::{start_server, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quakemap=info")),
        )
        .init();

    tracing::info!("🌍 QuakeMap starting");

    let state = AppState::new()?;
    start_server(state).await
}
