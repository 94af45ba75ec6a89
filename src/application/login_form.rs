//! Login form input and its shape constraints.

use serde::Deserialize;
use std::fmt;
use validator::{Validate, ValidationErrors};

use crate::application::messages::{LOGIN_ID_REQUIRED, PASSWORD_TOO_SHORT};
use crate::domain::entities::LoginAttempt;

/// Minimum password length, counted in characters.
pub const PASSWORD_MIN_LENGTH: usize = 6;

/// Raw login form as submitted by the browser.
///
/// Missing fields deserialize as empty strings so that they fail validation
/// with the field message instead of a deserialization error.
// The derive only takes literals: keep the messages in sync with
// `LOGIN_ID_REQUIRED`/`PASSWORD_TOO_SHORT` and `min` with `PASSWORD_MIN_LENGTH`.
#[derive(Clone, Default, Deserialize, Validate)]
pub struct LoginForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "ログインIDを入力してください"))]
    pub login_id: String,

    #[serde(default)]
    #[validate(length(min = 6, message = "パスワードは6文字以上である必要があります"))]
    pub password: String,
}

impl LoginForm {
    pub fn new(login_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login_id: login_id.into(),
            password: password.into(),
        }
    }

    pub fn to_attempt(&self) -> LoginAttempt {
        LoginAttempt::new(self.login_id.clone(), self.password.clone())
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("login_id", &self.login_id)
            .field("password", &"***")
            .finish()
    }
}

/// Inline, per-field validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub login_id: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.login_id.is_none() && self.password.is_none()
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors.field_errors();
        let first_message = |field: &str, fallback: &str| {
            fields.get(field).map(|errs| {
                errs.first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| fallback.to_string())
            })
        };

        Self {
            login_id: first_message("login_id", LOGIN_ID_REQUIRED),
            password: first_message("password", PASSWORD_TOO_SHORT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form() {
        assert!(LoginForm::new("admin", "admin123").validate().is_ok());
    }

    #[test]
    fn test_empty_login_id() {
        let errors: FieldErrors = LoginForm::new("", "admin123")
            .validate()
            .unwrap_err()
            .into();

        assert_eq!(errors.login_id.as_deref(), Some(LOGIN_ID_REQUIRED));
        assert_eq!(errors.password, None);
    }

    #[test]
    fn test_short_password() {
        let errors: FieldErrors = LoginForm::new("admin", "12345")
            .validate()
            .unwrap_err()
            .into();

        assert_eq!(errors.login_id, None);
        assert_eq!(errors.password.as_deref(), Some(PASSWORD_TOO_SHORT));
    }

    #[test]
    fn test_both_fields_invalid() {
        let errors: FieldErrors = LoginForm::default().validate().unwrap_err().into();

        assert_eq!(errors.login_id.as_deref(), Some(LOGIN_ID_REQUIRED));
        assert_eq!(errors.password.as_deref(), Some(PASSWORD_TOO_SHORT));
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_password_length_counts_characters() {
        // Six multi-byte characters satisfy the minimum.
        assert!(LoginForm::new("admin", "パスワード確").validate().is_ok());
        assert!(LoginForm::new("admin", "パスワード").validate().is_err());
        // Astral characters count once each, not per UTF-16 unit.
        assert!(LoginForm::new("admin", "🔑🔑🔑").validate().is_err());
    }

    #[test]
    fn test_minimum_matches_declared_length() {
        let at_min = "x".repeat(PASSWORD_MIN_LENGTH);
        let below_min = "x".repeat(PASSWORD_MIN_LENGTH - 1);

        assert!(LoginForm::new("admin", at_min).validate().is_ok());
        let errors: FieldErrors = LoginForm::new("admin", below_min)
            .validate()
            .unwrap_err()
            .into();
        assert_eq!(errors.password.as_deref(), Some(PASSWORD_TOO_SHORT));
    }

    #[test]
    fn test_missing_fields_deserialize_as_empty() {
        let form: LoginForm = serde_json::from_str("{}").unwrap();
        assert_eq!(form.login_id, "");
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_debug_hides_password() {
        let rendered = format!("{:?}", LoginForm::new("admin", "admin123"));
        assert!(!rendered.contains("admin123"));
    }
}
