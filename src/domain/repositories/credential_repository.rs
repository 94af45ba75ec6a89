//! Repository trait for the credential table.

use crate::domain::entities::CredentialCheck;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to the login id → password table.
///
/// # Implementations
///
/// - [`crate::infrastructure::registry::InMemoryUserRegistry`] - static in-memory table
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Checks a login id/password pair.
    ///
    /// # Returns
    ///
    /// - `Ok(CredentialCheck::Accepted)` if the id is known and the password matches
    /// - `Ok(CredentialCheck::Rejected)` if the id is unknown or the password differs
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store cannot be read.
    async fn verify(&self, login_id: &str, password: &str) -> Result<CredentialCheck, AppError>;
}
