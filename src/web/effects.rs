//! Per-request implementations of the login view's collaborators.

use async_trait::async_trait;
use serde_json::json;
use std::sync::{Arc, OnceLock};

use crate::domain::collaborators::{Navigator, Notifier, SessionInitiator};
use crate::domain::entities::UserRecord;
use crate::error::AppError;
use crate::infrastructure::session::SessionStore;

use super::flash::Flash;

/// Records what a login submission asked for so the handler can turn it
/// into an HTTP response.
///
/// - session start → new session in [`SessionStore`], token kept for the cookie
/// - notification → [`Flash`] message
/// - navigation → redirect target
///
/// Each effect can be recorded once per request.
pub struct RequestEffects {
    sessions: Arc<SessionStore>,
    issued_token: OnceLock<String>,
    flash: OnceLock<Flash>,
    destination: OnceLock<String>,
}

impl RequestEffects {
    pub fn new(sessions: Arc<SessionStore>) -> Self {
        Self {
            sessions,
            issued_token: OnceLock::new(),
            flash: OnceLock::new(),
            destination: OnceLock::new(),
        }
    }

    pub fn issued_token(&self) -> Option<&str> {
        self.issued_token.get().map(String::as_str)
    }

    pub fn flash(&self) -> Option<&Flash> {
        self.flash.get()
    }

    pub fn destination(&self) -> Option<&str> {
        self.destination.get().map(String::as_str)
    }

    fn record_flash(&self, flash: Flash) {
        if self.flash.set(flash).is_err() {
            tracing::warn!("Notification already recorded for this request");
        }
    }
}

#[async_trait]
impl SessionInitiator for RequestEffects {
    async fn start(&self, user: &UserRecord) -> Result<(), AppError> {
        if self.issued_token.get().is_some() {
            return Err(AppError::internal(
                "Session already started for this request",
                json!({"login_id": user.login_id}),
            ));
        }

        let token = self.sessions.create(user).await?;
        // Only this request's single submission writes the slot.
        let _ = self.issued_token.set(token);
        Ok(())
    }
}

impl Notifier for RequestEffects {
    fn notify_success(&self, message: &str) {
        self.record_flash(Flash::success(message));
    }

    fn notify_failure(&self, message: &str) {
        self.record_flash(Flash::failure(message));
    }
}

impl Navigator for RequestEffects {
    fn go_to(&self, path: &str) {
        if self.destination.set(path.to_string()).is_err() {
            tracing::warn!(path, "Navigation already recorded for this request");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Role;
    use chrono::Duration;

    fn effects() -> (Arc<SessionStore>, RequestEffects) {
        let store = Arc::new(SessionStore::new(
            "test-signing-secret".to_string(),
            Duration::seconds(60),
        ));
        (store.clone(), RequestEffects::new(store))
    }

    #[tokio::test]
    async fn test_session_start_issues_token() {
        let (store, effects) = effects();
        let user = UserRecord::new("admin", "管理者", Role::Admin);

        effects.start(&user).await.unwrap();

        let token = effects.issued_token().unwrap();
        assert_eq!(store.get(token).await.unwrap().user, user);
    }

    #[tokio::test]
    async fn test_second_session_start_fails() {
        let (store, effects) = effects();
        let user = UserRecord::new("admin", "管理者", Role::Admin);

        effects.start(&user).await.unwrap();
        assert!(effects.start(&user).await.is_err());
        assert_eq!(store.active_count().await, 1);
    }

    #[test]
    fn test_records_first_notification_and_destination() {
        let (_, effects) = effects();

        effects.notify_failure("first");
        effects.notify_success("second");
        effects.go_to("/admin");
        effects.go_to("/");

        assert_eq!(effects.flash(), Some(&Flash::failure("first")));
        assert_eq!(effects.destination(), Some("/admin"));
    }
}
