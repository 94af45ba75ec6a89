//! User registry backed by an in-memory table.
//!
//! - [`InMemoryUserRegistry`] - implements both repository traits
//! - [`RegistryFile`] - JSON file format and the demo registry

mod in_memory;
mod registry_file;

pub use in_memory::InMemoryUserRegistry;
pub use registry_file::RegistryFile;

use std::path::Path;

/// Errors raised while loading a registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("failed to read registry file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid registry file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("registry contains an empty login id")]
    EmptyLoginId,
    #[error("login id '{0}' has more than one user record")]
    DuplicateUser(String),
    #[error("stored password for '{0}' is shorter than the minimum length")]
    PasswordTooShort(String),
}

/// Loads the registry from `path`, or the demo registry when `path` is `None`.
///
/// # Errors
///
/// Returns [`RegistryError`] if the file cannot be read, parsed or validated.
pub fn load_registry(path: Option<&Path>) -> Result<InMemoryUserRegistry, RegistryError> {
    match path {
        Some(path) => {
            let registry = InMemoryUserRegistry::from_file(RegistryFile::load(path)?)?;
            tracing::info!(
                path = %path.display(),
                users = registry.user_count(),
                "User registry loaded"
            );
            Ok(registry)
        }
        None => {
            tracing::warn!("USERS_FILE not set, using built-in demo registry");
            Ok(InMemoryUserRegistry::demo())
        }
    }
}
