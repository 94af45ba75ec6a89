//! Login form submission handler.
//!
//! [`LoginView`] owns one login form instance: it validates the form shape,
//! guards against re-submission while an attempt is pending, asks
//! [`LoginService`] for a [`LoginOutcome`] and turns that outcome into side
//! effects on its collaborators.
//!
//! # Attempt lifecycle
//!
//! ```text
//! Idle ─submit─> Validating ─┬─> Authenticated ─> Redirecting ─> Idle
//!                            └─> Rejected ─────────────────────> Idle
//! ```
//!
//! Per submission exactly one of these happens:
//! - session start, success notification and navigation
//! - failure notification
//!
//! Field validation errors and suppressed submissions produce neither.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use validator::Validate;

use crate::application::login_form::{FieldErrors, LoginForm};
use crate::application::messages::{
    INVALID_CREDENTIALS, LOGIN_FAILED, LOGIN_SUCCEEDED, USER_NOT_FOUND,
};
use crate::application::services::LoginService;
use crate::domain::collaborators::{Navigator, Notifier, SessionInitiator};
use crate::domain::entities::{Destination, LoginOutcome, UserRecord};
use crate::domain::repositories::{CredentialRepository, UserRepository};

/// Observable state of a login view between and during attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
}

/// Why an attempt was rejected after passing field validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFailure {
    /// Unknown login id or wrong password.
    InvalidCredentials,
    /// Credentials accepted but no user record exists.
    UserMissing,
    /// A collaborator failed.
    Internal,
}

impl LoginFailure {
    /// Message shown in the failure notification.
    pub fn message(&self) -> &'static str {
        match self {
            LoginFailure::InvalidCredentials => INVALID_CREDENTIALS,
            LoginFailure::UserMissing => USER_NOT_FOUND,
            LoginFailure::Internal => LOGIN_FAILED,
        }
    }
}

/// Result of one call to [`LoginView::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// Form shape was invalid; nothing was submitted.
    Invalid(FieldErrors),
    /// Another attempt was still pending; this one was dropped.
    Busy,
    /// Session started and navigation requested.
    Authenticated {
        user: UserRecord,
        destination: Destination,
    },
    /// Failure notification emitted.
    Rejected(LoginFailure),
}

/// Clears the in-progress flag on every exit path.
struct InProgressGuard<'a>(&'a AtomicBool);

impl<'a> InProgressGuard<'a> {
    fn claim(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InProgressGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// One login form and its submission handler.
pub struct LoginView<C: CredentialRepository, U: UserRepository> {
    service: Arc<LoginService<C, U>>,
    session: Arc<dyn SessionInitiator>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    in_progress: AtomicBool,
}

impl<C: CredentialRepository, U: UserRepository> LoginView<C, U> {
    pub fn new(
        service: Arc<LoginService<C, U>>,
        session: Arc<dyn SessionInitiator>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            service,
            session,
            notifier,
            navigator,
            in_progress: AtomicBool::new(false),
        }
    }

    /// Returns true while an attempt is pending. Drives the disabled submit button.
    pub fn is_submitting(&self) -> bool {
        self.in_progress.load(Ordering::Acquire)
    }

    pub fn phase(&self) -> Phase {
        if self.is_submitting() {
            Phase::Validating
        } else {
            Phase::Idle
        }
    }

    /// Handles one form submission.
    ///
    /// Never fails: every error is recovered here and reported through the
    /// returned [`SubmitResult`] and the notifier.
    pub async fn submit(&self, form: &LoginForm) -> SubmitResult {
        let Some(_guard) = InProgressGuard::claim(&self.in_progress) else {
            tracing::debug!(login_id = %form.login_id, "Submission suppressed while another is pending");
            return SubmitResult::Busy;
        };

        if let Err(errors) = form.validate() {
            tracing::debug!(login_id = %form.login_id, "Login form failed validation");
            return SubmitResult::Invalid(errors.into());
        }

        let attempt = form.to_attempt();

        let outcome = match self.service.verify(&attempt).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(login_id = %attempt.login_id, error = %e, "Credential check failed");
                return self.reject(LoginFailure::Internal);
            }
        };

        tracing::debug!(login_id = %attempt.login_id, outcome = outcome.label(), "Credential check finished");

        match outcome {
            LoginOutcome::Success { user } => self.complete(user).await,
            LoginOutcome::AuthFailure => {
                tracing::info!(login_id = %attempt.login_id, "Login rejected: invalid credentials");
                self.reject(LoginFailure::InvalidCredentials)
            }
            LoginOutcome::NotFoundFailure => self.reject(LoginFailure::UserMissing),
        }
    }

    async fn complete(&self, user: UserRecord) -> SubmitResult {
        if let Err(e) = self.session.start(&user).await {
            tracing::error!(login_id = %user.login_id, error = %e, "Failed to start session");
            return self.reject(LoginFailure::Internal);
        }

        let destination = user.role.destination();
        self.notifier.notify_success(LOGIN_SUCCEEDED);
        self.navigator.go_to(destination.path());

        tracing::info!(
            login_id = %user.login_id,
            role = %user.role,
            destination = destination.path(),
            "Login succeeded"
        );

        SubmitResult::Authenticated { user, destination }
    }

    fn reject(&self, failure: LoginFailure) -> SubmitResult {
        self.notifier.notify_failure(failure.message());
        SubmitResult::Rejected(failure)
    }
}
