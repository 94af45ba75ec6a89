//! Credential validation service.

use std::sync::Arc;

use crate::domain::entities::{CredentialCheck, LoginAttempt, LoginOutcome};
use crate::domain::repositories::{CredentialRepository, UserRepository};
use crate::error::AppError;

/// Checks login attempts against the credential table and user registry.
///
/// Business outcomes (wrong password, missing user record) are returned as
/// [`LoginOutcome`] variants. Only collaborator failures are errors.
pub struct LoginService<C: CredentialRepository, U: UserRepository> {
    credentials: Arc<C>,
    users: Arc<U>,
}

impl<C: CredentialRepository, U: UserRepository> LoginService<C, U> {
    /// Creates a new login service.
    ///
    /// # Arguments
    ///
    /// - `credentials` - credential table used to verify passwords
    /// - `users` - registry used to resolve the user record after verification
    pub fn new(credentials: Arc<C>, users: Arc<U>) -> Self {
        Self { credentials, users }
    }

    /// Determines authorization and identity for an attempt.
    ///
    /// # Flow
    ///
    /// 1. Verify `login_id`/`password` against the credential table
    /// 2. On rejection, return [`LoginOutcome::AuthFailure`]
    /// 3. Look up the first user record with the same `login_id`
    /// 4. Return [`LoginOutcome::Success`] or [`LoginOutcome::NotFoundFailure`]
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if either collaborator fails.
    pub async fn verify(&self, attempt: &LoginAttempt) -> Result<LoginOutcome, AppError> {
        let check = self
            .credentials
            .verify(&attempt.login_id, &attempt.password)
            .await?;

        if check == CredentialCheck::Rejected {
            tracing::debug!(login_id = %attempt.login_id, "Credentials rejected");
            return Ok(LoginOutcome::AuthFailure);
        }

        match self.users.find_by_login_id(&attempt.login_id).await? {
            Some(user) => Ok(LoginOutcome::Success { user }),
            None => {
                tracing::warn!(
                    login_id = %attempt.login_id,
                    "Credentials accepted but no user record exists"
                );
                Ok(LoginOutcome::NotFoundFailure)
            }
        }
    }
}
