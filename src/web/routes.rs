//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    admin_handler, home_handler, login_page_handler, login_submit_handler, logout_handler,
};
use crate::web::middleware::web_auth;
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// Pages requiring a session.
///
/// Protect via [`crate::web::middleware::web_auth::layer`].
///
/// # Endpoints
///
/// - `GET /` - Member home
/// - `GET /admin` - Admin overview (admin role only)
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/", get(home_handler)).route(
        "/admin",
        get(admin_handler).route_layer(middleware::from_fn(web_auth::require_admin)),
    )
}

/// Pages reachable without a session.
///
/// # Endpoints
///
/// - `GET  /login` - Login form
/// - `POST /login` - Login form submission
/// - `POST /logout` - End the current session
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_page_handler).post(login_submit_handler))
        .route("/logout", post(logout_handler))
}
