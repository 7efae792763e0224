//! # Identity and auth configuration
//!
//! Two sections of `summarist.toml`:
//!
//! ```toml
//! [identity]
//! api_key = ""              # empty selects the offline memory provider
//! endpoint = "https://identitytoolkit.googleapis.com/v1"
//! continue_uri = ""         # where federated sign-in returns; empty = current page
//!
//! [auth]
//! redirect_url = "https://summarist.vercel.app/for-you"
//!
//! [auth.guest]
//! email = "guest@gmail.com"
//! password = "guest123"
//! ```
//!
//! `SUMMARIST_API_KEY` and `SUMMARIST_REDIRECT_URL` override the file. Browser builds
//! read them when compiled; native builds read them at run time, after `.env`.

use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://identitytoolkit.googleapis.com/v1";
pub const DEFAULT_REDIRECT_URL: &str = "https://summarist.vercel.app/for-you";

/// Connection settings for the identity service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IdentityConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub continue_uri: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: default_endpoint(),
            continue_uri: String::new(),
        }
    }
}

impl IdentityConfig {
    /// Whether the hosted service is configured.
    pub fn is_hosted(&self) -> bool {
        !self.api_key.is_empty()
    }

    pub fn with_env_overrides(mut self) -> Self {
        if let Some(key) = env_override("SUMMARIST_API_KEY", option_env!("SUMMARIST_API_KEY")) {
            self.api_key = key;
        }
        self
    }
}

/// What the auth modal does around the provider calls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// URL loaded after every successful sign-in. A relative URL resolves against
    /// the current page.
    #[serde(default = "default_redirect_url")]
    pub redirect_url: String,
    /// Fixed credentials behind the "Login as a Guest" button. No button without them.
    #[serde(default)]
    pub guest: Option<GuestCredentials>,
}

fn default_redirect_url() -> String {
    DEFAULT_REDIRECT_URL.to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            redirect_url: default_redirect_url(),
            guest: None,
        }
    }
}

impl AuthConfig {
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(url) = env_override(
            "SUMMARIST_REDIRECT_URL",
            option_env!("SUMMARIST_REDIRECT_URL"),
        ) {
            self.redirect_url = url;
        }
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuestCredentials {
    pub email: String,
    pub password: String,
}

#[cfg_attr(target_arch = "wasm32", allow(unused_variables))]
fn env_override(name: &str, built_in: Option<&'static str>) -> Option<String> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenvy::dotenv().ok();
        if let Ok(value) = std::env::var(name) {
            if !value.is_empty() {
                return Some(value);
            }
        }
    }
    built_in
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_select_memory_provider() {
        let config = IdentityConfig::default();
        assert!(!config.is_hosted());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(AuthConfig::default().redirect_url, DEFAULT_REDIRECT_URL);
        assert!(AuthConfig::default().guest.is_none());
    }

    #[test]
    fn test_env_override_prefers_built_in_when_runtime_unset() {
        assert_eq!(
            env_override("SUMMARIST_TEST_UNSET_VARIABLE", Some("baked")),
            Some("baked".to_string())
        );
        assert_eq!(env_override("SUMMARIST_TEST_UNSET_VARIABLE", Some("")), None);
        assert_eq!(env_override("SUMMARIST_TEST_UNSET_VARIABLE", None), None);
    }
}
