//! Gateway Wire Contract
//!
//! JSON bodies exchanged between the UI and the gateway.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login response and every error body: `{success, message}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub success: bool,
    pub message: String,
}

impl ApiMessage {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_missing_fields() {
        let req: LoginRequest = serde_json::from_str(r#"{"username":"admin"}"#).unwrap();
        assert_eq!(req.username, "admin");
        assert_eq!(req.password, "");
    }

    #[test]
    fn test_failure_body_shape() {
        let body = serde_json::to_value(ApiMessage::failure("nope")).unwrap();
        assert_eq!(body, serde_json::json!({"success": false, "message": "nope"}));
    }
}
