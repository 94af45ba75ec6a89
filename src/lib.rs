//! # pointmoney-login
//!
//! Login service for the pointmoney point management system, built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Users, login outcomes, sessions, repository and
//!   collaborator traits
//! - **Application Layer** ([`application`]) - Credential validation and the login
//!   form submission flow
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory registry and session store
//! - **API Layer** ([`api`]) - Health endpoint and HTTP middleware
//! - **Web Layer** ([`web`]) - Login, home and admin pages
//!
//! ## Login flow
//!
//! 1. The form is validated (`login_id` required, `password` at least 6 characters)
//! 2. [`application::services::LoginService`] checks the credential table and
//!    resolves the user record, returning a [`domain::entities::LoginOutcome`]
//! 3. [`application::login_view::LoginView`] starts a session, notifies and
//!    redirects admins to `/admin` and everyone else to `/`, or reports the failure
//!
//! ## Quick Start
//!
//! ```bash
//! export SESSION_SIGNING_SECRET="change-me"
//! export USERS_FILE="users.json"  # Optional, defaults to a demo registry
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::login_form::LoginForm;
    pub use crate::application::login_view::{LoginFailure, LoginView, SubmitResult};
    pub use crate::application::services::LoginService;
    pub use crate::domain::entities::{Destination, LoginOutcome, Role, UserRecord};
    pub use crate::error::AppError;
    pub use crate::infrastructure::registry::InMemoryUserRegistry;
    pub use crate::infrastructure::session::SessionStore;
    pub use crate::state::AppState;
}
