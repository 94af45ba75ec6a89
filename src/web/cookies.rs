//! Cookie header helpers.

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::response::Response;
use serde_json::json;

use crate::error::AppError;

pub const SESSION_COOKIE: &str = "session_token";
pub const FLASH_COOKIE: &str = "flash";

/// Extracts a cookie value from the `Cookie` header.
///
/// Handles multiple cookies by splitting on semicolons and ignoring
/// unrelated pairs.
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|cookie_header| cookie_header.to_str().ok())
        .flat_map(|cookie_str| cookie_str.split(';'))
        .find_map(|cookie| {
            let mut parts = cookie.trim().splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(key), Some(value)) if key == name && !value.is_empty() => {
                    Some(value.to_string())
                }
                _ => None,
            }
        })
}

fn attributes(secure: bool) -> &'static str {
    if secure {
        "; Path=/; HttpOnly; SameSite=Lax; Secure"
    } else {
        "; Path=/; HttpOnly; SameSite=Lax"
    }
}

/// `Set-Cookie` value carrying a session token.
pub fn session_cookie(token: &str, max_age_seconds: i64, secure: bool) -> String {
    format!(
        "{}={}; Max-Age={}{}",
        SESSION_COOKIE,
        token,
        max_age_seconds,
        attributes(secure)
    )
}

/// `Set-Cookie` value carrying an encoded flash message for the next page.
pub fn flash_cookie(value: &str, secure: bool) -> String {
    format!("{}={}; Max-Age=60{}", FLASH_COOKIE, value, attributes(secure))
}

/// `Set-Cookie` value that deletes `name`.
pub fn removal_cookie(name: &str, secure: bool) -> String {
    format!("{}=; Max-Age=0{}", name, attributes(secure))
}

/// Appends a `Set-Cookie` header to a response.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the cookie is not a valid header value.
pub fn append_cookie(response: &mut Response, cookie: String) -> Result<(), AppError> {
    let value = HeaderValue::from_str(&cookie)
        .map_err(|_| AppError::internal("Invalid cookie value", json!({})))?;
    response.headers_mut().append(SET_COOKIE, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn test_read_cookie_among_others() {
        let headers = headers("theme=dark; session_token=abc123; flash=s.xyz");

        assert_eq!(read_cookie(&headers, SESSION_COOKIE).as_deref(), Some("abc123"));
        assert_eq!(read_cookie(&headers, FLASH_COOKIE).as_deref(), Some("s.xyz"));
        assert_eq!(read_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_read_cookie_ignores_empty_value() {
        let headers = headers("session_token=");
        assert_eq!(read_cookie(&headers, SESSION_COOKIE), None);
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("tok", 3600, true);

        assert!(cookie.starts_with("session_token=tok; Max-Age=3600"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.ends_with("Secure"));

        assert!(!session_cookie("tok", 3600, false).contains("Secure"));
    }

    #[test]
    fn test_removal_cookie() {
        assert!(removal_cookie(FLASH_COOKIE, false).starts_with("flash=; Max-Age=0"));
    }
}
