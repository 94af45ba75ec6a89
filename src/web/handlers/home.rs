//! Member home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension,
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;
use crate::web::cookies::{FLASH_COOKIE, append_cookie, removal_cookie};
use crate::web::flash::Flash;
use crate::web::middleware::web_auth::CurrentSession;

#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    name: String,
    login_id: String,
    role: String,
    expires_at: String,
    flash: Option<Flash>,
}

/// Renders the landing page for authenticated users.
///
/// # Endpoint
///
/// `GET /`
///
/// # Authentication
///
/// Requires a session; see [`crate::web::middleware::web_auth::layer`].
pub async fn home_handler(
    State(state): State<AppState>,
    Extension(CurrentSession(session)): Extension<CurrentSession>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let flash = Flash::from_headers(&headers);
    let had_flash = flash.is_some();

    let template = HomeTemplate {
        name: session.user.name,
        login_id: session.user.login_id,
        role: session.user.role.to_string(),
        expires_at: session.expires_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        flash,
    };

    let mut response = template.into_response();
    if had_flash {
        append_cookie(&mut response, removal_cookie(FLASH_COOKIE, state.cookie_secure))?;
    }

    Ok(response)
}
