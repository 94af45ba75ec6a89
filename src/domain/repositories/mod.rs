//! Repository trait definitions for the domain layer.
//!
//! These traits are the injectable seam between the login flow and whatever
//! holds credentials and user records. The in-memory registry in
//! `crate::infrastructure::registry` implements both; a real identity store
//! can be substituted without touching the login logic.
//!
//! # Available Repositories
//!
//! - [`CredentialRepository`] - login id / password verification
//! - [`UserRepository`] - user record lookup

pub mod credential_repository;
pub mod user_repository;

pub use credential_repository::CredentialRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use credential_repository::MockCredentialRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
