//! Admin page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension,
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
};

use crate::domain::entities::UserRecord;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::cookies::{FLASH_COOKIE, append_cookie, removal_cookie};
use crate::web::flash::Flash;
use crate::web::middleware::web_auth::CurrentSession;

/// Template for the admin page.
///
/// Renders `templates/admin.html` with:
/// - Registered users and their roles
/// - Active session count
#[derive(Template, WebTemplate)]
#[template(path = "admin.html")]
pub struct AdminTemplate {
    name: String,
    users: Vec<UserRecord>,
    active_sessions: usize,
    flash: Option<Flash>,
}

/// Renders the admin overview.
///
/// # Endpoint
///
/// `GET /admin`
///
/// # Authentication
///
/// Requires an admin session; members are redirected to `/` by
/// [`crate::web::middleware::web_auth::require_admin`].
pub async fn admin_handler(
    State(state): State<AppState>,
    Extension(CurrentSession(session)): Extension<CurrentSession>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let users = state.registry.list_users().await?;
    let active_sessions = state.sessions.active_count().await;

    let flash = Flash::from_headers(&headers);
    let had_flash = flash.is_some();

    let template = AdminTemplate {
        name: session.user.name,
        users,
        active_sessions,
        flash,
    };

    let mut response = template.into_response();
    if had_flash {
        append_cookie(&mut response, removal_cookie(FLASH_COOKIE, state.cookie_secure))?;
    }

    Ok(response)
}
