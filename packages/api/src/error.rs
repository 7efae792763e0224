//! Provider errors.
//!
//! The hosted service reports failures as `SCREAMING_CASE` strings. They are turned
//! into the `auth/kebab-case` codes the web SDK uses, and the user-facing message is
//! derived from the code so what the user reads matches what other clients show.

use thiserror::Error;

/// Well-known error codes.
pub mod codes {
    pub const POPUP_CLOSED_BY_USER: &str = "auth/popup-closed-by-user";
    pub const POPUP_BLOCKED: &str = "auth/popup-blocked";
    pub const NETWORK_REQUEST_FAILED: &str = "auth/network-request-failed";
    pub const INTERNAL_ERROR: &str = "auth/internal-error";
    pub const OPERATION_NOT_SUPPORTED: &str = "auth/operation-not-supported-in-this-environment";
    pub const USER_NOT_FOUND: &str = "auth/user-not-found";
    pub const WRONG_PASSWORD: &str = "auth/wrong-password";
    pub const INVALID_CREDENTIAL: &str = "auth/invalid-credential";
    pub const EMAIL_ALREADY_IN_USE: &str = "auth/email-already-in-use";
    pub const WEAK_PASSWORD: &str = "auth/weak-password";
    pub const INVALID_EMAIL: &str = "auth/invalid-email";
    pub const MISSING_EMAIL: &str = "auth/missing-email";
    pub const TOO_MANY_REQUESTS: &str = "auth/too-many-requests";
    pub const USER_DISABLED: &str = "auth/user-disabled";
}

/// A rejected identity-provider call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AuthError {
    code: String,
    message: String,
}

impl AuthError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Error with the standard message for `code`.
    pub fn from_code(code: &str) -> Self {
        Self::new(code, format!("Firebase: Error ({code})."))
    }

    /// Map a REST error message such as `"WEAK_PASSWORD : Password should be at least
    /// 6 characters"` to an error.
    pub fn from_rest_message(raw: &str) -> Self {
        let key = raw.split(" : ").next().unwrap_or(raw).trim();
        let code = match key {
            "EMAIL_NOT_FOUND" => codes::USER_NOT_FOUND.to_string(),
            "INVALID_PASSWORD" => codes::WRONG_PASSWORD.to_string(),
            "INVALID_LOGIN_CREDENTIALS" | "INVALID_IDP_RESPONSE" => {
                codes::INVALID_CREDENTIAL.to_string()
            }
            "EMAIL_EXISTS" => codes::EMAIL_ALREADY_IN_USE.to_string(),
            "TOO_MANY_ATTEMPTS_TRY_LATER" => codes::TOO_MANY_REQUESTS.to_string(),
            other => format!("auth/{}", other.to_lowercase().replace('_', "-")),
        };
        Self::from_code(&code)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The user dismissed the federated sign-in popup.
    pub fn is_popup_closed(&self) -> bool {
        self.code == codes::POPUP_CLOSED_BY_USER
    }

    pub fn is_popup_blocked(&self) -> bool {
        self.code == codes::POPUP_BLOCKED
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            tracing::warn!("Malformed identity provider response: {}", e);
            Self::from_code(codes::INTERNAL_ERROR)
        } else {
            tracing::warn!("Identity provider request failed: {}", e);
            Self::from_code(codes::NETWORK_REQUEST_FAILED)
        }
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(e: serde_json::Error) -> Self {
        tracing::warn!("Failed to decode identity payload: {}", e);
        Self::from_code(codes::INTERNAL_ERROR)
    }
}
