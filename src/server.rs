//! HTTP server initialization and runtime setup.
//!
//! Builds the index client, wires the redirect service and runs the Axum server.

use crate::config::Config;
use crate::infrastructure::index::{HttpIndexRepository, build_client};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Shared HTTP client for the package index
/// - Redirect service
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let client = build_client(config.upstream_timeout(), &config.user_agent)
        .context("Failed to build index HTTP client")?;

    let repository = HttpIndexRepository::new(client, config.index_endpoint.clone());
    tracing::info!("Resolving against {}", config.index_endpoint);

    let state = AppState::new(repository, config.index_endpoint.clone());

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
