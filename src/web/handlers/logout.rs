//! Logout handler.

use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
};

use crate::application::messages::LOGGED_OUT;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::cookies::{
    SESSION_COOKIE, append_cookie, flash_cookie, read_cookie, removal_cookie,
};
use crate::web::flash::Flash;

/// Ends the current session.
///
/// # Endpoint
///
/// `POST /logout`
///
/// Revokes the session (if any), clears the session cookie and redirects to
/// `/login` with a flash message. Safe to call without a session.
pub async fn logout_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    if let Some(token) = read_cookie(&headers, SESSION_COOKIE)
        && state.sessions.revoke(&token).await
    {
        tracing::info!("Session revoked on logout");
    }

    let mut response = Redirect::to("/login").into_response();
    append_cookie(
        &mut response,
        removal_cookie(SESSION_COOKIE, state.cookie_secure),
    )?;
    append_cookie(
        &mut response,
        flash_cookie(&Flash::success(LOGGED_OUT).encode(), state.cookie_secure),
    )?;

    Ok(response)
}
