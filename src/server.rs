//! HTTP server initialization and runtime setup.
//!
//! Builds the provider client, the DNS resolver and the shortener service,
//! then runs the Axum server until a shutdown signal arrives.

use crate::application::services::ShortenerService;
use crate::config::Config;
use crate::infrastructure::{HickoryTxtResolver, IonosClient};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the shortener service from configuration.
///
/// # Errors
///
/// Returns an error if the HTTP client or the system resolver cannot be created.
pub fn build_shortener(config: &Config) -> Result<ShortenerService> {
    let provider = IonosClient::builder(&config.provider_api_url, &config.provider_api_token)
        .timeout(config.http_timeout())
        .build()
        .context("Failed to build DNS provider client")?;

    let resolver =
        HickoryTxtResolver::from_system_conf().context("Failed to create DNS resolver")?;

    Ok(ShortenerService::new(
        Arc::new(provider),
        Arc::new(resolver),
        config.domain.clone(),
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The provider client or resolver cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let shortener = build_shortener(&config)?;
    tracing::info!(domain = %config.domain, "Shortener ready");

    let state = AppState::new(Arc::new(shortener));
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
