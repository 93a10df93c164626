//! Request and response payloads for the auth API. Field names follow the
//! server's JSON contract; `otpCode` stays camelCase on the wire.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp_code: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Common response envelope for all three auth endpoints. `token` is only
/// ever present on login responses, and the server does not guarantee it
/// even there.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_otp_request_uses_camel_case_on_the_wire() {
        let request = VerifyOtpRequest {
            email: "user@test.com".to_string(),
            otp_code: "123456".to_string(),
        };

        let json = serde_json::to_string(&request).expect("Failed to serialize");
        assert!(json.contains("\"otpCode\":\"123456\""));
        assert!(!json.contains("otp_code"));
    }

    #[test]
    fn auth_response_tolerates_missing_token() {
        let response: AuthResponse =
            serde_json::from_str(r#"{"success":true,"message":"ok"}"#).expect("Failed to parse");

        assert!(response.success);
        assert_eq!(response.message, "ok");
        assert!(response.token.is_none());
    }

    #[test]
    fn auth_response_carries_token_when_present() {
        let response: AuthResponse =
            serde_json::from_str(r#"{"success":true,"message":"ok","token":"abc123"}"#)
                .expect("Failed to parse");

        assert_eq!(response.token.as_deref(), Some("abc123"));
    }
}
