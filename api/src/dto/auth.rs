use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;
use validator::Validate;

use gate_core::domain::entities::account::Account;
use gate_core::domain::value_objects::Rights;

/// Login request body.
///
/// Carries no validation attributes: empty or malformed credentials go
/// through to the engine and come back as an authentication failure, so
/// the response never reveals whether the shape or the secret was wrong.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_email: String,
    pub user_password: String,
}

/// Account creation request body
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    #[validate(email)]
    pub user_email: String,

    #[validate(length(min = 8))]
    pub user_password: String,

    #[validate(length(min = 1, max = 30))]
    pub user_first_name: String,

    #[validate(length(min = 1, max = 30))]
    pub user_last_name: String,

    #[validate(range(min = 0, max = 150))]
    pub user_age: i32,

    /// Opaque rights map; size limits are enforced by the engine
    pub user_rights: Rights,

    /// Opaque token payload; size limits are enforced by the engine
    #[serde(rename = "userJWTPayload")]
    pub user_jwt_payload: JsonValue,
}

/// Successful login response carrying the signed session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub jwt: String,
}

/// Account representation returned to callers. The password hash has no
/// field here, so it cannot leak through this surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub rights: Rights,
    pub jwt_payload: JsonValue,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            email: account.email,
            first_name: account.first_name,
            last_name: account.last_name,
            age: account.age,
            rights: account.rights,
            jwt_payload: account.jwt_payload,
            created_at: account.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_uses_camel_case_fields() {
        let request: LoginRequest = serde_json::from_str(
            r#"{"userEmail": "a@x.com", "userPassword": "secret-value"}"#,
        )
        .unwrap();
        assert_eq!(request.user_email, "a@x.com");
        assert_eq!(request.user_password, "secret-value");
    }

    #[test]
    fn test_create_request_accepts_upper_case_jwt_field() {
        let request: CreateAccountRequest = serde_json::from_str(
            r#"{
                "userEmail": "a@x.com",
                "userPassword": "long-enough",
                "userFirstName": "Ada",
                "userLastName": "Lovelace",
                "userAge": 36,
                "userRights": {"accounts": {"create": true}},
                "userJWTPayload": {"theme": "dark"}
            }"#,
        )
        .unwrap();
        assert_eq!(request.user_first_name, "Ada");
        assert!(request.user_rights["accounts"]["create"]);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_request_validation_rejects_bad_email() {
        let request: CreateAccountRequest = serde_json::from_str(
            r#"{
                "userEmail": "not-an-email",
                "userPassword": "long-enough",
                "userFirstName": "Ada",
                "userLastName": "Lovelace",
                "userAge": 36,
                "userRights": {},
                "userJWTPayload": null
            }"#,
        )
        .unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_account_response_has_no_hash_field() {
        let account = Account::new(
            "a@x.com".to_string(),
            "hashed:secret".to_string(),
            "Ada".to_string(),
            "Lovelace".to_string(),
            36,
            Rights::new(),
            serde_json::json!(null),
        );

        let response = AccountResponse::from(account);
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "a@x.com");
    }
}
