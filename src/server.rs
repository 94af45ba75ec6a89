//! HTTP server initialization and runtime setup.
//!
//! Loads the user registry, creates the session store, spawns the session
//! reaper and runs the Axum server until shutdown.

use crate::config::Config;
use crate::infrastructure::registry::load_registry;
use crate::infrastructure::session::{SessionStore, run_session_reaper};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// How often expired sessions are purged.
const SESSION_REAP_INTERVAL: Duration = Duration::from_secs(300);

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - User registry (file or built-in demo)
/// - Session store and its reaper task
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The registry file cannot be loaded or is inconsistent
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let registry = load_registry(config.users_file.as_deref())
        .context("Failed to load user registry")?;
    let registry = Arc::new(registry);

    let sessions = Arc::new(SessionStore::new(
        config.session_signing_secret.clone(),
        chrono::Duration::seconds(config.session_ttl_seconds),
    ));

    tokio::spawn(run_session_reaper(sessions.clone(), SESSION_REAP_INTERVAL));
    tracing::info!("Session reaper started");

    let state = AppState::new(registry, sessions, config.cookie_secure);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
