//! HTTP API server.
//!
//! Routes live under `/api/v1`, the MCP tool endpoint is nested at `/mcp`,
//! and interactive OpenAPI docs are served at `/docs`. All student handlers
//! delegate to the shared `StudentService`; error responses go through the
//! centralized mapping in `error`.

mod error;
mod routes;
mod state;
mod v1;


use std::net::{IpAddr, Ipv4Addr};

use miette::Diagnostic;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{ApiError, ErrorResponse};
pub use routes::create_router;
pub use state::AppState;

use crate::db::Database;
use crate::mcp::create_mcp_service;

/// API server configuration
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
        }
    }
}

/// Errors that can occur while running the API server.
#[derive(Error, Diagnostic, Debug)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    #[diagnostic(code(roster::api::io))]
    Io(#[from] std::io::Error),
}

/// Initialize tracing subscriber with env filter
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Run the API server with the given configuration.
///
/// Serves the REST routes and the MCP tool endpoint on one listener and
/// shuts both down on ctrl-c.
pub async fn run<D: Database + 'static>(config: Config, db: D) -> Result<(), ServerError> {
    init_tracing();

    let state = AppState::new(db);
    let shutdown = CancellationToken::new();

    let mcp_service = create_mcp_service::<D>(state.db_arc(), shutdown.clone());

    let app = create_router(state)
        .nest_service("/mcp", mcp_service)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("API server listening on http://{}", addr);
    info!("MCP endpoint available at http://{}/mcp", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    Ok(())
}

async fn shutdown_signal(shutdown: CancellationToken) {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
    shutdown.cancel();
}
