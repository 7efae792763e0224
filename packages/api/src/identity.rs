//! Runtime choice between the hosted client and the in-memory provider.

use crate::config::{AuthConfig, IdentityConfig};
use crate::error::AuthError;
use crate::firebase::FirebaseAuth;
use crate::memory::MemoryIdentity;
use crate::models::User;
use crate::provider::{FederatedProvider, IdentityProvider};

/// The identity provider the app runs against.
#[derive(Clone, Debug)]
pub enum Identity {
    Firebase(FirebaseAuth),
    Memory(MemoryIdentity),
}

impl Identity {
    /// Hosted client when an API key is configured, otherwise an offline memory
    /// provider seeded with the guest account.
    pub fn from_config(identity: &IdentityConfig, auth: &AuthConfig) -> Self {
        if identity.is_hosted() {
            tracing::info!("Using hosted identity service at {}", identity.endpoint);
            return Identity::Firebase(FirebaseAuth::new(identity.clone()));
        }

        tracing::warn!("No identity API key configured, using offline accounts");
        let mut memory = MemoryIdentity::persistent();
        if let Some(guest) = &auth.guest {
            memory = memory.with_account(&guest.email, &guest.password);
        }
        Identity::Memory(memory)
    }
}

impl IdentityProvider for Identity {
    async fn current_user(&self) -> Result<Option<User>, AuthError> {
        match self {
            Identity::Firebase(p) => p.current_user().await,
            Identity::Memory(p) => p.current_user().await,
        }
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<User, AuthError> {
        match self {
            Identity::Firebase(p) => p.sign_in_with_password(email, password).await,
            Identity::Memory(p) => p.sign_in_with_password(email, password).await,
        }
    }

    async fn create_user_with_password(&self, email: &str, password: &str) -> Result<User, AuthError> {
        match self {
            Identity::Firebase(p) => p.create_user_with_password(email, password).await,
            Identity::Memory(p) => p.create_user_with_password(email, password).await,
        }
    }

    async fn sign_in_with_popup(&self, provider: FederatedProvider) -> Result<User, AuthError> {
        match self {
            Identity::Firebase(p) => p.sign_in_with_popup(provider).await,
            Identity::Memory(p) => p.sign_in_with_popup(provider).await,
        }
    }

    async fn sign_in_with_redirect(&self, provider: FederatedProvider) -> Result<(), AuthError> {
        match self {
            Identity::Firebase(p) => p.sign_in_with_redirect(provider).await,
            Identity::Memory(p) => p.sign_in_with_redirect(provider).await,
        }
    }

    async fn redirect_result(&self) -> Result<Option<User>, AuthError> {
        match self {
            Identity::Firebase(p) => p.redirect_result().await,
            Identity::Memory(p) => p.redirect_result().await,
        }
    }

    async fn send_password_reset_email(&self, email: &str) -> Result<(), AuthError> {
        match self {
            Identity::Firebase(p) => p.send_password_reset_email(email).await,
            Identity::Memory(p) => p.send_password_reset_email(email).await,
        }
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        match self {
            Identity::Firebase(p) => p.sign_out().await,
            Identity::Memory(p) => p.sign_out().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GuestCredentials;

    #[tokio::test]
    async fn test_offline_mode_seeds_guest_account() {
        let auth = AuthConfig {
            guest: Some(GuestCredentials {
                email: "guest@gmail.com".to_string(),
                password: "guest123".to_string(),
            }),
            ..AuthConfig::default()
        };
        let identity = Identity::from_config(&IdentityConfig::default(), &auth);

        assert!(matches!(identity, Identity::Memory(_)));
        assert!(identity
            .sign_in_with_password("guest@gmail.com", "guest123")
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_offline_sign_in_survives_page_load() {
        let auth = AuthConfig {
            guest: Some(GuestCredentials {
                email: "guest@gmail.com".to_string(),
                password: "guest123".to_string(),
            }),
            ..AuthConfig::default()
        };
        let before = Identity::from_config(&IdentityConfig::default(), &auth);
        let user = before
            .sign_in_with_password("guest@gmail.com", "guest123")
            .await
            .unwrap();

        let after = Identity::from_config(&IdentityConfig::default(), &auth);
        assert_eq!(after.current_user().await.unwrap(), Some(user));

        after.sign_out().await.unwrap();
        let reloaded = Identity::from_config(&IdentityConfig::default(), &auth);
        assert_eq!(reloaded.current_user().await.unwrap(), None);
    }

    #[test]
    fn test_api_key_selects_hosted_client() {
        let config = IdentityConfig {
            api_key: "key".to_string(),
            ..IdentityConfig::default()
        };
        let identity = Identity::from_config(&config, &AuthConfig::default());
        assert!(matches!(identity, Identity::Firebase(_)));
    }
}
