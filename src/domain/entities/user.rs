//! User record entity.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::login::Destination;

/// Closed set of user roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Member,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Member => "member",
        }
    }

    /// Where a freshly authenticated user with this role is sent.
    pub fn destination(&self) -> Destination {
        match self {
            Role::Admin => Destination::Admin,
            Role::Member => Destination::Home,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered user.
///
/// Owned by the user registry; the login flow only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub login_id: String,
    pub name: String,
    pub role: Role,
}

impl UserRecord {
    pub fn new(login_id: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            login_id: login_id.into(),
            name: name.into(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
