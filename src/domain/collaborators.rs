//! Side-effect collaborators driven by the login view.
//!
//! The login view decides *what* happens after an attempt; these traits
//! decide *how*. The web layer implements all three on
//! [`crate::web::effects::RequestEffects`].

use crate::domain::entities::UserRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Establishes an authenticated session for a user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionInitiator: Send + Sync {
    /// Called once per successful attempt.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the session cannot be created.
    async fn start(&self, user: &UserRecord) -> Result<(), AppError>;
}

/// Presents success and failure messages to the operator.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify_success(&self, message: &str);
    fn notify_failure(&self, message: &str);
}

/// Sends the operator to another page.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    fn go_to(&self, path: &str);
}
