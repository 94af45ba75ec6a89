//! One-shot flash messages carried across a redirect.
//!
//! The message is stored base64-encoded in the `flash` cookie so that
//! non-ASCII text survives the `Cookie` header.

use axum::http::HeaderMap;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::cookies::{FLASH_COOKIE, read_cookie};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Failure,
}

impl FlashKind {
    fn tag(&self) -> &'static str {
        match self {
            FlashKind::Success => "success",
            FlashKind::Failure => "failure",
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "success" => Some(FlashKind::Success),
            "failure" => Some(FlashKind::Failure),
            _ => None,
        }
    }
}

/// A notification shown once on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Failure,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == FlashKind::Success
    }

    /// Cookie-safe encoding: `<kind>.<base64url(message)>`.
    pub fn encode(&self) -> String {
        format!(
            "{}.{}",
            self.kind.tag(),
            URL_SAFE_NO_PAD.encode(self.message.as_bytes())
        )
    }

    pub fn decode(value: &str) -> Option<Self> {
        let (tag, payload) = value.split_once('.')?;
        let kind = FlashKind::from_tag(tag)?;
        let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
        let message = String::from_utf8(bytes).ok()?;

        Some(Self { kind, message })
    }

    /// Reads the pending flash message from request cookies, if any.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        read_cookie(headers, FLASH_COOKIE).and_then(|value| Self::decode(&value))
    }
}
