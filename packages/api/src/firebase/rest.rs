//! Identity Toolkit request and response bodies.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PasswordRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub return_secure_token: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct OobCodeRequest<'a> {
    pub request_type: &'static str,
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CreateAuthUriRequest<'a> {
    pub provider_id: &'a str,
    pub continue_uri: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CreateAuthUriResponse {
    pub auth_uri: String,
    pub session_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SignInWithIdpRequest<'a> {
    pub request_uri: &'a str,
    pub session_id: &'a str,
    pub return_secure_token: bool,
    pub return_idp_credential: bool,
}

/// Shared shape of `signInWithPassword`, `signUp` and `signInWithIdp` responses.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct TokenResponse {
    pub local_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub provider_id: Option<String>,
    pub id_token: String,
    #[serde(default)]
    pub refresh_token: String,
    /// Seconds, encoded as a string by the service.
    #[serde(default)]
    pub expires_in: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(super) struct ErrorBody {
    pub message: String,
}
