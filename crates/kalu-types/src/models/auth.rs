//! Authentication, account and service-status payloads.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Response of `POST /token`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    /// JWT to send as `Authorization: Bearer <token>`
    pub access_token: String,
    /// Usually `bearer`
    pub token_type: String,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
}

/// Response of `GET /`: service banner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiInfo {
    pub app: String,
    pub version: String,
    pub status: String,
    pub message: String,
    #[serde(default)]
    pub features: Vec<String>,
}

/// The account behind the current bearer token (`GET /users/me`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_user_without_full_name() {
        let user: User = serde_json::from_str(
            r#"{"id": 1, "username": "oscar", "email": "oscar@kalu.ao",
                "is_active": true, "created_at": "2026-01-15T08:00:00.5"}"#,
        )
        .unwrap();
        assert_eq!(user.username, "oscar");
        assert!(user.full_name.is_none());
    }
}
