//! Admin account and session types.

use serde::{Deserialize, Serialize};

/// Session probe returned by `GET /admins/sessions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionStatus {
    /// Signed-in admin, `None` when the session is anonymous
    pub user_id: Option<i64>,
}

impl SessionStatus {
    pub fn is_signed_in(&self) -> bool {
        self.user_id.is_some()
    }
}

/// Admin account returned by `GET /admins`.
///
/// The API answers with `{"user_id": null}` when no one is signed in, so
/// every field is optional. The stored password hash is never read.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Admin {
    pub user_id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
}

/// Username/password pair for signing in or creating an admin.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Both fields are required by the API
    pub fn is_complete(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_admin_lookup() {
        let admin: Admin = serde_json::from_str(r#"{"user_id": null}"#).unwrap();
        assert_eq!(admin.user_id, None);
        assert_eq!(admin.username, None);
    }

    #[test]
    fn test_admin_ignores_password_hash() {
        let admin: Admin = serde_json::from_str(
            r#"{"user_id": 3, "username": "ops", "password": "sha256$abc$def"}"#,
        )
        .unwrap();
        assert_eq!(admin.user_id, Some(3));
        assert_eq!(admin.username.as_deref(), Some("ops"));
    }

    #[test]
    fn test_session_status() {
        let status: SessionStatus = serde_json::from_str(r#"{"user_id": 7}"#).unwrap();
        assert!(status.is_signed_in());
        assert!(!SessionStatus::default().is_signed_in());
    }

    #[test]
    fn test_credentials_completeness() {
        let mut creds = Credentials {
            username: "ops".to_string(),
            password: "secret".to_string(),
        };
        assert!(creds.is_complete());

        creds.username = "   ".to_string();
        assert!(!creds.is_complete());
    }
}
