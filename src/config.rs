//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Required Variables
//!
//! - `SESSION_SIGNING_SECRET` - HMAC key used to hash session tokens
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `USERS_FILE` - Path to the registry JSON (default: built-in demo registry)
//! - `SESSION_TTL_SECONDS` - Session lifetime, at most 365 days (default: 28800, i.e. 8 hours)
//! - `COOKIE_SECURE` - Mark cookies `Secure` (default: `false`)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Upper bound for `SESSION_TTL_SECONDS` (365 days).
pub const MAX_SESSION_TTL_SECONDS: i64 = 365 * 24 * 60 * 60;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Registry file. `None` selects the built-in demo registry.
    pub users_file: Option<PathBuf>,
    pub session_ttl_seconds: i64,
    /// HMAC signing secret used to hash session tokens before storage.
    pub session_signing_secret: String,
    /// Adds the `Secure` attribute to cookies. Enable when served over HTTPS.
    pub cookie_secure: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SESSION_SIGNING_SECRET` is missing or
    /// `SESSION_TTL_SECONDS` is not an integer.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let users_file = env::var("USERS_FILE")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let session_ttl_seconds = match env::var("SESSION_TTL_SECONDS") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("SESSION_TTL_SECONDS must be an integer, got '{}'", v))?,
            Err(_) => 28_800,
        };

        let session_signing_secret =
            env::var("SESSION_SIGNING_SECRET").context("SESSION_SIGNING_SECRET must be set")?;

        let cookie_secure = env::var("COOKIE_SECURE")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            users_file,
            session_ttl_seconds,
            session_signing_secret,
            cookie_secure,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `session_ttl_seconds` is not in `1..=MAX_SESSION_TTL_SECONDS`
    /// - `session_signing_secret` is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.session_ttl_seconds <= 0 {
            anyhow::bail!(
                "SESSION_TTL_SECONDS must be greater than 0, got {}",
                self.session_ttl_seconds
            );
        }

        if self.session_ttl_seconds > MAX_SESSION_TTL_SECONDS {
            anyhow::bail!(
                "SESSION_TTL_SECONDS must be at most {}, got {}",
                MAX_SESSION_TTL_SECONDS,
                self.session_ttl_seconds
            );
        }

        if self.session_signing_secret.is_empty() {
            anyhow::bail!("SESSION_SIGNING_SECRET must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        match &self.users_file {
            Some(path) => tracing::info!("  Users file: {}", path.display()),
            None => tracing::info!("  Users file: (built-in demo registry)"),
        }
        tracing::info!("  Session TTL: {}s", self.session_ttl_seconds);
        tracing::info!("  Secure cookies: {}", self.cookie_secure);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
