//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /login`, `POST /login` - Login form (public, rate limited)
//! - `POST /logout`               - End session (public, rate limited)
//! - `GET  /`                     - Member home (session required)
//! - `GET  /admin`                - Admin overview (admin session required)
//! - `GET  /health`               - Health check (public)
//! - `/static/*`                  - Static assets
//! - anything else                 - `404` JSON error
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the login endpoints
//! - **Authentication** - Cookie session on protected pages
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{health_handler, not_found_handler};
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::middleware::web_auth;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// Must be served with connect info so the rate limiter can read the peer
/// address.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let web_protected = web::routes::protected_routes().route_layer(
        middleware::from_fn_with_state(state.clone(), web_auth::layer),
    );

    let web_public = web::routes::public_routes().layer(rate_limit::login_layer());

    let router = Router::new()
        .merge(web_protected)
        .merge(web_public)
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new("static"))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
