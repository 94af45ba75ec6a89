//! In-memory session table.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::Sha256;
use std::collections::HashMap;
use serde_json::json;
use tokio::sync::RwLock;

use crate::domain::entities::{Session, UserRecord};
use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Random bytes per session token before encoding.
const TOKEN_BYTES: usize = 32;

/// Server-side sessions keyed by the HMAC-SHA256 of their token.
///
/// The raw token only ever lives in the client's cookie. A leaked session
/// table cannot be replayed without the signing secret.
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
    signing_secret: String,
    ttl: Duration,
}

impl SessionStore {
    /// Creates an empty store.
    ///
    /// # Arguments
    ///
    /// - `signing_secret` - HMAC key for token hashing
    /// - `ttl` - lifetime of every new session
    pub fn new(signing_secret: String, ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            signing_secret,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Hashes a raw token with HMAC-SHA256 using the signing secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    fn hash_token(&self, token: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(token.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    fn generate_token() -> String {
        let mut bytes = [0u8; TOKEN_BYTES];
        rand::rng().fill(&mut bytes);
        URL_SAFE_NO_PAD.encode(bytes)
    }

    /// Starts a session for `user` and returns the raw token for the cookie.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the configured TTL pushes the expiry
    /// past the representable date range.
    pub async fn create(&self, user: &UserRecord) -> Result<String, AppError> {
        let session = Session::start(user.clone(), self.ttl).ok_or_else(|| {
            AppError::internal(
                "Session expiry out of range",
                json!({"ttl_seconds": self.ttl.num_seconds()}),
            )
        })?;
        let token = Self::generate_token();

        self.sessions
            .write()
            .await
            .insert(self.hash_token(&token), session);

        tracing::debug!(login_id = %user.login_id, "Session created");
        Ok(token)
    }

    /// Resolves a raw token to its live session.
    ///
    /// Expired sessions are removed and reported as absent.
    pub async fn get(&self, token: &str) -> Option<Session> {
        let key = self.hash_token(token);

        {
            let sessions = self.sessions.read().await;
            match sessions.get(&key) {
                None => return None,
                Some(session) if !session.is_expired() => return Some(session.clone()),
                Some(_) => {}
            }
        }

        self.sessions.write().await.remove(&key);
        tracing::debug!("Expired session removed on access");
        None
    }

    /// Ends a session. Returns false if the token was unknown.
    pub async fn revoke(&self, token: &str) -> bool {
        let key = self.hash_token(token);
        self.sessions.write().await.remove(&key).is_some()
    }

    /// Drops every expired session and returns how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired_at(now));
        before - sessions.len()
    }

    pub async fn active_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Role;

    fn member() -> UserRecord {
        UserRecord::new("member01", "山田 太郎", Role::Member)
    }

    fn store(ttl_seconds: i64) -> SessionStore {
        SessionStore::new("test-signing-secret".to_string(), Duration::seconds(ttl_seconds))
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let store = store(60);

        let token = store.create(&member()).await.unwrap();
        let session = store.get(&token).await.unwrap();

        assert_eq!(session.user.login_id, "member01");
        assert_eq!(store.active_count().await, 1);
    }

    #[tokio::test]
    async fn test_tokens_are_unique() {
        let store = store(60);

        let a = store.create(&member()).await.unwrap();
        let b = store.create(&member()).await.unwrap();

        assert_ne!(a, b);
        assert_eq!(store.active_count().await, 2);
    }

    #[tokio::test]
    async fn test_unknown_token() {
        let store = store(60);
        assert!(store.get("not-a-token").await.is_none());
    }

    #[tokio::test]
    async fn test_expired_session_removed_on_access() {
        let store = store(0);

        let token = store.create(&member()).await.unwrap();

        assert!(store.get(&token).await.is_none());
        assert_eq!(store.active_count().await, 0);
    }

    #[tokio::test]
    async fn test_revoke() {
        let store = store(60);
        let token = store.create(&member()).await.unwrap();

        assert!(store.revoke(&token).await);
        assert!(!store.revoke(&token).await);
        assert!(store.get(&token).await.is_none());
    }

    #[tokio::test]
    async fn test_purge_expired() {
        let store = store(0);
        store.create(&member()).await.unwrap();
        store.create(&member()).await.unwrap();

        assert_eq!(store.purge_expired().await, 2);
        assert_eq!(store.active_count().await, 0);
    }

    #[test]
    fn test_token_hash_depends_on_secret() {
        let a = SessionStore::new("secret-a".to_string(), Duration::seconds(60));
        let b = SessionStore::new("secret-b".to_string(), Duration::seconds(60));

        assert_ne!(a.hash_token("token"), b.hash_token("token"));
        assert_eq!(a.hash_token("token").len(), 64);
    }

    #[tokio::test]
    async fn test_create_with_oversized_ttl_fails() {
        let store = SessionStore::new(
            "test-signing-secret".to_string(),
            Duration::seconds(10_000_000_000_000),
        );

        let err = store.create(&member()).await.unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
        assert_eq!(store.active_count().await, 0);
    }
}
