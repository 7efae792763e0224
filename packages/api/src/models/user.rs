//! # Signed-in user
//!
//! The identity service owns the account; this is the projection the frontend keeps
//! after a successful sign-in. UI code only checks whether one is present, plus
//! [`User::display_name`] for labels.

use serde::{Deserialize, Serialize};

/// Provider id for email + password accounts.
pub const PASSWORD_PROVIDER_ID: &str = "password";

/// User information returned by the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    /// `"password"` or the federated provider id (e.g. `"google.com"`).
    pub provider_id: String,
}

impl User {
    /// Get display name, falling back to email, then uid.
    pub fn display_name(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.uid)
    }
}
