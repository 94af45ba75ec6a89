//! Repository trait for user records.

use crate::domain::entities::UserRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only view of the user registry.
///
/// # Implementations
///
/// - [`crate::infrastructure::registry::InMemoryUserRegistry`] - static in-memory registry
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds the first user record with the given login id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store cannot be read.
    async fn find_by_login_id(&self, login_id: &str) -> Result<Option<UserRecord>, AppError>;

    /// Returns a snapshot of all user records in registry order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store cannot be read.
    async fn list_users(&self) -> Result<Vec<UserRecord>, AppError>;
}
