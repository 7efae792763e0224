//! Persisted session data.

use serde::{Deserialize, Serialize};

use super::User;

/// Storage key for the serialized session.
pub const SESSION_STORAGE_KEY: &str = "summarist.session";

/// Storage key for the user signed in to offline accounts. It holds a [`User`], not a
/// [`Session`]: offline sign-ins have no tokens.
pub const OFFLINE_USER_KEY: &str = "summarist.offlineUser";

/// Tokens issued by the identity service for the signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub user: User,
    pub id_token: String,
    pub refresh_token: String,
    /// Token lifetime in seconds as reported by the provider.
    pub expires_in: Option<u64>,
}
