//! System user model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Default role for new accounts
pub const DEFAULT_ROLE: &str = "employee";

/// System user record.
///
/// The password hash is loaded from the database but never serialized, so no
/// response body can carry it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SystemUser {
    pub id: Uuid,
    pub username: String,
    /// Hashed password (bcrypt)
    #[serde(skip_serializing, default)]
    #[schema(write_only)]
    pub password_hash: String,
    pub role: String,
    #[schema(value_type = Object)]
    pub permissions: Option<serde_json::Value>,
    pub is_active: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create user request
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSystemUser {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Plaintext password, hashed before storage
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Defaults to "employee"
    pub role: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub permissions: Option<serde_json::Value>,
    pub is_active: Option<bool>,
}

/// Update user request. A missing or empty password keeps the stored hash.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSystemUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub permissions: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl UpdateSystemUser {
    /// The new plaintext password, if one was actually supplied
    pub fn new_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> SystemUser {
        SystemUser {
            id: Uuid::new_v4(),
            username: "jan".to_string(),
            password_hash: "$2b$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy".to_string(),
            role: DEFAULT_ROLE.to_string(),
            permissions: Some(serde_json::json!({})),
            is_active: Some(true),
            created_at: Some(Utc::now()),
            updated_at: None,
        }
    }

    #[test]
    fn test_password_hash_is_never_serialized() {
        let json = serde_json::to_value(sample_user()).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object["username"], "jan");
        assert!(!object.contains_key("passwordHash"));
        assert!(!object.contains_key("password_hash"));
        assert!(!object.contains_key("password"));
        assert!(!json.to_string().contains("$2b$10$"));
    }

    #[test]
    fn test_list_serialization_redacts_every_user() {
        let users = vec![sample_user(), sample_user()];
        let body = serde_json::to_string(&users).unwrap();
        assert!(!body.contains("passwordHash"));
        assert!(!body.contains("$2b$10$"));
    }

    #[test]
    fn test_empty_password_counts_as_absent() {
        let update: UpdateSystemUser = serde_json::from_str(r#"{"password":""}"#).unwrap();
        assert_eq!(update.new_password(), None);

        let update: UpdateSystemUser = serde_json::from_str(r#"{"password":"n3w"}"#).unwrap();
        assert_eq!(update.new_password(), Some("n3w"));
    }

    #[test]
    fn test_create_requires_password() {
        let create = CreateSystemUser {
            username: "jan".to_string(),
            password: String::new(),
            role: None,
            permissions: None,
            is_active: None,
        };
        assert!(create.validate().is_err());
    }
}
