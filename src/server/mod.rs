use anyhow::Result;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

use crate::constants::DEFAULT_PORT;
use handlers::{get_earthquakes, get_plates, index_html};

// Create the main application router
fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_html))
        .route("/api/earthquakes", get(get_earthquakes))
        .route("/api/plates", get(get_plates))
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
        .with_state(state)
}

pub async fn start_server(state: AppState) -> Result<()> {
    start_server_with_port(state, DEFAULT_PORT).await
}

async fn start_server_with_port(state: AppState, port: u16) -> Result<()> {
    let app = create_app(state);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("map available at http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
