//! In-memory credential table and user registry.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};

use crate::application::login_form::PASSWORD_MIN_LENGTH;
use crate::domain::entities::{CredentialCheck, UserRecord};
use crate::domain::repositories::{CredentialRepository, UserRepository};
use crate::error::AppError;

use super::{RegistryError, RegistryFile};

/// Static credential table plus user records, fixed for the process lifetime.
///
/// Passwords are compared by plain equality. Construction rejects registries
/// that break the one-record-per-login-id invariant.
#[derive(Debug, Clone)]
pub struct InMemoryUserRegistry {
    credentials: HashMap<String, String>,
    users: Vec<UserRecord>,
}

impl InMemoryUserRegistry {
    /// Builds a registry from a credential table and user records.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::EmptyLoginId`] if any credential or user has an empty id
    /// - [`RegistryError::DuplicateUser`] if two user records share a login id
    /// - [`RegistryError::PasswordTooShort`] if a stored password could never pass
    ///   form validation
    pub fn new(
        credentials: HashMap<String, String>,
        users: Vec<UserRecord>,
    ) -> Result<Self, RegistryError> {
        for (login_id, password) in &credentials {
            if login_id.is_empty() {
                return Err(RegistryError::EmptyLoginId);
            }
            if password.chars().count() < PASSWORD_MIN_LENGTH {
                return Err(RegistryError::PasswordTooShort(login_id.clone()));
            }
        }

        let mut seen = HashSet::with_capacity(users.len());
        for user in &users {
            if user.login_id.is_empty() {
                return Err(RegistryError::EmptyLoginId);
            }
            if !seen.insert(user.login_id.as_str()) {
                return Err(RegistryError::DuplicateUser(user.login_id.clone()));
            }
        }

        for login_id in credentials.keys() {
            if !seen.contains(login_id.as_str()) {
                tracing::warn!(login_id = %login_id, "Credential has no matching user record");
            }
        }

        Ok(Self { credentials, users })
    }

    pub fn from_file(file: RegistryFile) -> Result<Self, RegistryError> {
        Self::new(file.credentials, file.users)
    }

    /// Built-in demo registry.
    pub fn demo() -> Self {
        let RegistryFile { credentials, users } = RegistryFile::demo();
        Self { credentials, users }
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn credential_count(&self) -> usize {
        self.credentials.len()
    }

    /// Login ids present in the credential table but missing a user record.
    pub fn orphaned_credentials(&self) -> Vec<&str> {
        let mut orphans: Vec<&str> = self
            .credentials
            .keys()
            .filter(|id| !self.users.iter().any(|u| &u.login_id == *id))
            .map(String::as_str)
            .collect();
        orphans.sort_unstable();
        orphans
    }
}

#[async_trait]
impl CredentialRepository for InMemoryUserRegistry {
    async fn verify(&self, login_id: &str, password: &str) -> Result<CredentialCheck, AppError> {
        Ok(match self.credentials.get(login_id) {
            Some(expected) if expected == password => CredentialCheck::Accepted,
            _ => CredentialCheck::Rejected,
        })
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRegistry {
    async fn find_by_login_id(&self, login_id: &str) -> Result<Option<UserRecord>, AppError> {
        Ok(self.users.iter().find(|u| u.login_id == login_id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>, AppError> {
        Ok(self.users.clone())
    }
}
