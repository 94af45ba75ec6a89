//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LoginService;
use crate::infrastructure::registry::InMemoryUserRegistry;
use crate::infrastructure::session::SessionStore;

/// Login service wired to the in-memory registry for both lookups.
pub type AppLoginService = LoginService<InMemoryUserRegistry, InMemoryUserRegistry>;

#[derive(Clone)]
pub struct AppState {
    pub login_service: Arc<AppLoginService>,
    pub registry: Arc<InMemoryUserRegistry>,
    pub sessions: Arc<SessionStore>,
    pub cookie_secure: bool,
}

impl AppState {
    pub fn new(
        registry: Arc<InMemoryUserRegistry>,
        sessions: Arc<SessionStore>,
        cookie_secure: bool,
    ) -> Self {
        let login_service = Arc::new(LoginService::new(registry.clone(), registry.clone()));

        Self {
            login_service,
            registry,
            sessions,
            cookie_secure,
        }
    }
}
