pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::http::Method;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::error::AppResult;
use crate::relay::RelayClient;
use crate::store::ProfileStore;

/// Shared by every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<ProfileStore>,
    pub relay: RelayClient,
}

impl AppState {
    pub fn new(store: Arc<ProfileStore>, relay: RelayClient) -> Self {
        Self { store, relay }
    }
}

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    routes::router().layer(cors).with_state(state)
}

pub async fn serve(addr: &str, state: AppState) -> AppResult<()> {
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    info!(addr = %local_addr, "macrolink listening");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("macrolink stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
