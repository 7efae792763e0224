//! Authentication context and hooks for the UI.

use api::{AuthConfig, Identity, IdentityProvider, User};
use dioxus::prelude::*;

use crate::config::AppConfig;

/// What the UI knows about the signed-in user.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AuthStatus {
    /// The persisted session has not been resolved yet.
    #[default]
    Unknown,
    Authenticated(User),
    Unauthenticated,
}

impl AuthStatus {
    pub fn from_user(user: Option<User>) -> Self {
        match user {
            Some(user) => AuthStatus::Authenticated(user),
            None => AuthStatus::Unauthenticated,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AuthStatus::Unknown)
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            AuthStatus::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Get the current authentication status.
/// Returns a signal that updates when the user signs in or out.
pub fn use_auth() -> Signal<AuthStatus> {
    use_context::<Signal<AuthStatus>>()
}

/// The identity provider the app was started with.
pub fn use_identity() -> Identity {
    use_context::<Identity>()
}

pub fn use_auth_config() -> AuthConfig {
    use_context::<AuthConfig>()
}

/// Provider component that owns the identity client and the auth status.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(config: AppConfig, children: Element) -> Element {
    let identity = use_context_provider(|| Identity::from_config(&config.identity, &config.auth));
    use_context_provider(|| config.auth.clone());
    let mut status = use_context_provider(|| Signal::new(AuthStatus::Unknown));

    // Resolve the persisted session on mount
    let _ = use_resource(move || {
        let identity = identity.clone();
        async move {
            match identity.current_user().await {
                Ok(user) => status.set(AuthStatus::from_user(user)),
                Err(e) => {
                    tracing::warn!("Failed to restore session: {}", e);
                    status.set(AuthStatus::Unauthenticated);
                }
            }
        }
    });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_user() {
        assert_eq!(AuthStatus::from_user(None), AuthStatus::Unauthenticated);
        assert!(AuthStatus::default().is_loading());

        let user = User {
            uid: "u1".to_string(),
            email: None,
            display_name: None,
            provider_id: "password".to_string(),
        };
        let status = AuthStatus::from_user(Some(user.clone()));
        assert_eq!(status.user(), Some(&user));
        assert!(!status.is_loading());
    }
}
