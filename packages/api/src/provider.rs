//! The identity provider seam.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::models::User;

/// Third-party account providers offered for federated sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FederatedProvider {
    Google,
}

impl FederatedProvider {
    /// Provider id understood by the identity service.
    pub fn provider_id(self) -> &'static str {
        match self {
            FederatedProvider::Google => "google.com",
        }
    }
}

/// Operations delegated to the hosted identity service.
///
/// Implementations are used from a single UI thread; calls are awaited one at a
/// time and are never cancelled.
pub trait IdentityProvider {
    /// User of the persisted session, if any.
    fn current_user(&self) -> impl Future<Output = Result<Option<User>, AuthError>>;

    fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<User, AuthError>>;

    /// Create an account and sign it in.
    fn create_user_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<User, AuthError>>;

    fn sign_in_with_popup(
        &self,
        provider: FederatedProvider,
    ) -> impl Future<Output = Result<User, AuthError>>;

    /// Start a federated sign-in that leaves the page. It completes through
    /// [`IdentityProvider::redirect_result`] once the browser comes back.
    fn sign_in_with_redirect(
        &self,
        provider: FederatedProvider,
    ) -> impl Future<Output = Result<(), AuthError>>;

    /// Finish a pending redirect sign-in. `Ok(None)` when nothing is pending.
    fn redirect_result(&self) -> impl Future<Output = Result<Option<User>, AuthError>>;

    fn send_password_reset_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<(), AuthError>>;

    fn sign_out(&self) -> impl Future<Output = Result<(), AuthError>>;
}
