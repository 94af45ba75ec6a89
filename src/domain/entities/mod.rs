//! Core domain entities for the login flow.
//!
//! # Entity Types
//!
//! - [`UserRecord`] - A registered user and their [`Role`]
//! - [`LoginAttempt`] - One submitted identifier/password pair
//! - [`LoginOutcome`] - Typed result of checking an attempt
//! - [`Session`] - An authenticated session
//!
//! Entities are plain data structures; the login logic lives in
//! [`crate::application`].

pub mod login;
pub mod session;
pub mod user;

pub use login::{CredentialCheck, Destination, LoginAttempt, LoginOutcome};
pub use session::Session;
pub use user::{Role, UserRecord};
