//! Login attempt and its outcomes.

use std::fmt;

use super::user::UserRecord;

/// One submitted identifier/password pair.
///
/// Lives only for the duration of a single submission.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginAttempt {
    pub login_id: String,
    pub password: String,
}

impl LoginAttempt {
    pub fn new(login_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login_id: login_id.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginAttempt")
            .field("login_id", &self.login_id)
            .field("password", &"***")
            .finish()
    }
}

/// Answer of the credential table for an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialCheck {
    Accepted,
    Rejected,
}

/// Result of checking a [`LoginAttempt`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials matched and the user record was found.
    Success { user: UserRecord },
    /// Unknown login id or wrong password. No field is blamed.
    AuthFailure,
    /// Credentials matched but the registry has no record for the id.
    NotFoundFailure,
}

impl LoginOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            LoginOutcome::Success { .. } => "success",
            LoginOutcome::AuthFailure => "auth_failure",
            LoginOutcome::NotFoundFailure => "not_found",
        }
    }
}

/// Post-login landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Admin,
    Home,
}

impl Destination {
    pub fn path(&self) -> &'static str {
        match self {
            Destination::Admin => "/admin",
            Destination::Home => "/",
        }
    }
}
