//! Login page and login form submission handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;
use std::sync::Arc;

use crate::application::login_form::{FieldErrors, LoginForm};
use crate::application::login_view::{LoginFailure, LoginView, SubmitResult};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::cookies::{
    FLASH_COOKIE, SESSION_COOKIE, append_cookie, flash_cookie, read_cookie, removal_cookie,
    session_cookie,
};
use crate::web::effects::RequestEffects;
use crate::web::flash::Flash;

/// Template for the login page.
///
/// Renders `templates/login.html` with:
/// - Login id and password fields with inline errors
/// - Optional flash message from the previous request
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    login_id: String,
    login_id_error: Option<String>,
    password_error: Option<String>,
    flash: Option<Flash>,
}

impl LoginTemplate {
    fn blank(flash: Option<Flash>) -> Self {
        Self {
            login_id: String::new(),
            login_id_error: None,
            password_error: None,
            flash,
        }
    }

    fn with_errors(login_id: String, errors: FieldErrors) -> Self {
        Self {
            login_id,
            login_id_error: errors.login_id,
            password_error: errors.password,
            flash: None,
        }
    }

    fn with_flash(login_id: String, flash: Option<Flash>) -> Self {
        Self {
            login_id,
            login_id_error: None,
            password_error: None,
            flash,
        }
    }
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /login`
///
/// Visitors that already hold a live session are redirected to the page
/// matching their role. A pending flash message (e.g. after logout) is shown
/// once and its cookie cleared.
pub async fn login_page_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    if let Some(token) = read_cookie(&headers, SESSION_COOKIE)
        && let Some(session) = state.sessions.get(&token).await
    {
        return Ok(Redirect::to(session.user.role.destination().path()).into_response());
    }

    let flash = Flash::from_headers(&headers);
    let had_flash = flash.is_some();

    let mut response = LoginTemplate::blank(flash).into_response();
    if had_flash {
        append_cookie(&mut response, removal_cookie(FLASH_COOKIE, state.cookie_secure))?;
    }

    Ok(response)
}

/// Handles a login form submission.
///
/// # Endpoint
///
/// `POST /login` (`application/x-www-form-urlencoded`: `login_id`, `password`)
///
/// # Responses
///
/// - **303 See Other** to `/admin` or `/` on success, with `session_token`
///   and `flash` cookies
/// - **422 Unprocessable Entity**: form re-rendered with field messages
/// - **401 Unauthorized**: form re-rendered with the failure message
/// - **500 Internal Server Error**: form re-rendered with the generic failure message
pub async fn login_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let effects = Arc::new(RequestEffects::new(state.sessions.clone()));
    let view = LoginView::new(
        state.login_service.clone(),
        effects.clone(),
        effects.clone(),
        effects.clone(),
    );

    let result = view.submit(&form).await;

    match result {
        SubmitResult::Invalid(errors) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            LoginTemplate::with_errors(form.login_id, errors),
        )
            .into_response()),
        SubmitResult::Busy => Ok((
            StatusCode::CONFLICT,
            LoginTemplate::with_flash(form.login_id, None),
        )
            .into_response()),
        SubmitResult::Rejected(failure) => {
            let status = match failure {
                LoginFailure::InvalidCredentials | LoginFailure::UserMissing => {
                    StatusCode::UNAUTHORIZED
                }
                LoginFailure::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            };
            let flash = effects.flash().cloned();

            Ok((status, LoginTemplate::with_flash(form.login_id, flash)).into_response())
        }
        SubmitResult::Authenticated { destination, .. } => {
            let token = effects.issued_token().ok_or_else(|| {
                AppError::internal("Session token was not issued", json!({}))
            })?;
            let target = effects.destination().unwrap_or(destination.path());

            let mut response = Redirect::to(target).into_response();
            append_cookie(
                &mut response,
                session_cookie(
                    token,
                    state.sessions.ttl().num_seconds(),
                    state.cookie_secure,
                ),
            )?;
            if let Some(flash) = effects.flash() {
                append_cookie(
                    &mut response,
                    flash_cookie(&flash.encode(), state.cookie_secure),
                )?;
            }

            Ok(response)
        }
    }
}
