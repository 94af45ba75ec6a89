//! JSON registry file format and the built-in demo registry.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::domain::entities::{Role, UserRecord};

use super::RegistryError;

/// On-disk registry layout.
///
/// ```json
/// {
///   "credentials": { "admin": "admin123" },
///   "users": [{ "login_id": "admin", "name": "管理者", "role": "admin" }]
/// }
/// ```
///
/// Credentials and user records are listed separately; a credential without
/// a matching user record is allowed and surfaces as a "user not found"
/// login failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryFile {
    #[serde(default)]
    pub credentials: HashMap<String, String>,
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

impl RegistryFile {
    /// Reads and parses a registry file.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Io`] if the file cannot be read and
    /// [`RegistryError::Parse`] if it is not valid registry JSON.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let raw = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| RegistryError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Registry used when no file is configured.
    pub fn demo() -> Self {
        let credentials = [("admin", "admin123"), ("member01", "member123")]
            .into_iter()
            .map(|(id, pw)| (id.to_string(), pw.to_string()))
            .collect();

        let users = vec![
            UserRecord::new("admin", "管理者", Role::Admin),
            UserRecord::new("member01", "山田 太郎", Role::Member),
        ];

        Self { credentials, users }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_registry_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "credentials": {{"admin": "admin123", "staff": "staff123"}},
                "users": [
                    {{"login_id": "admin", "name": "管理者", "role": "admin"}},
                    {{"login_id": "staff", "name": "Staff", "role": "member"}}
                ]
            }}"#
        )
        .unwrap();

        let registry = RegistryFile::load(file.path()).unwrap();

        assert_eq!(registry.credentials.len(), 2);
        assert_eq!(registry.users[1].role, Role::Member);
    }

    #[test]
    fn test_missing_file() {
        let err = RegistryFile::load(Path::new("/nonexistent/users.json")).unwrap_err();
        assert!(matches!(err, RegistryError::Io { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"users\": [{{\"login_id\": \"x\", \"role\": \"root\"}}]}}").unwrap();

        let err = RegistryFile::load(file.path()).unwrap_err();
        assert!(matches!(err, RegistryError::Parse { .. }));
    }

    #[test]
    fn test_demo_registry_is_consistent() {
        let demo = RegistryFile::demo();

        for user in &demo.users {
            assert!(demo.credentials.contains_key(&user.login_id));
        }
    }
}
