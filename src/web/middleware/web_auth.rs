//! Cookie-based session middleware for protected pages.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{Redirect, Response},
};

use crate::domain::entities::Session;
use crate::state::AppState;
use crate::web::cookies::{SESSION_COOKIE, read_cookie};

/// Session of the authenticated user, inserted into request extensions by [`layer`].
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Session);

/// Authenticates page requests using the `session_token` cookie.
///
/// # Cookie Format
///
/// ```text
/// Cookie: session_token=<token>
/// ```
///
/// # Authentication Flow
///
/// 1. Extract `session_token` cookie from request
/// 2. Resolve it via [`crate::infrastructure::session::SessionStore`]
/// 3. On success, insert [`CurrentSession`] and continue to handler
/// 4. On missing, unknown or expired token, redirect to `/login`
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::web::middleware::web_auth;
///
/// let protected = Router::new()
///     .route("/", get(home_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), web_auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    let Some(token) = read_cookie(req.headers(), SESSION_COOKIE) else {
        return Err(Redirect::to("/login"));
    };

    match st.sessions.get(&token).await {
        Some(session) => {
            req.extensions_mut().insert(CurrentSession(session));
            Ok(next.run(req).await)
        }
        None => {
            tracing::debug!("Unknown or expired session, redirecting to login");
            Err(Redirect::to("/login"))
        }
    }
}

/// Restricts a route to admin sessions.
///
/// Must run after [`layer`]. Members are sent to their home page.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, Redirect> {
    match req.extensions().get::<CurrentSession>() {
        Some(CurrentSession(session)) if session.user.is_admin() => Ok(next.run(req).await),
        Some(CurrentSession(session)) => {
            tracing::info!(login_id = %session.user.login_id, "Non-admin denied admin page");
            Err(Redirect::to(session.user.role.destination().path()))
        }
        None => Err(Redirect::to("/login")),
    }
}
