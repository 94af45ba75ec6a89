//! Authenticated session entity.

use chrono::{DateTime, Duration, Utc};

use super::user::UserRecord;

/// Server-side session created after a successful login.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: UserRecord,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Starts a session for `user` that lives for `ttl`.
    ///
    /// Returns `None` if the expiry time is not representable.
    pub fn start(user: UserRecord, ttl: Duration) -> Option<Self> {
        let created_at = Utc::now();
        let expires_at = created_at.checked_add_signed(ttl)?;
        Some(Self {
            user,
            created_at,
            expires_at,
        })
    }

    /// Returns true once the session has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
