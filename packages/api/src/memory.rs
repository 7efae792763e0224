use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{codes, AuthError};
use crate::models::session::OFFLINE_USER_KEY;
use crate::models::user::PASSWORD_PROVIDER_ID;
use crate::models::User;
use crate::persistence;
use crate::provider::{FederatedProvider, IdentityProvider};

/// Minimum password length the hosted service accepts.
const MIN_PASSWORD_LEN: usize = 6;

/// A call received by [`MemoryIdentity`], in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IdentityCall {
    CurrentUser,
    SignInWithPassword { email: String, password: String },
    CreateUser { email: String, password: String },
    SignInWithPopup(FederatedProvider),
    SignInWithRedirect(FederatedProvider),
    RedirectResult,
    SendPasswordResetEmail { email: String },
    SignOut,
}

#[derive(Debug, Default)]
struct MemoryState {
    accounts: HashMap<String, String>,
    current: Option<User>,
    federated: Option<Result<User, AuthError>>,
    pending_redirect: Option<User>,
    next_failure: Option<AuthError>,
    calls: Vec<IdentityCall>,
    next_uid: u64,
    /// Mirror `current` to storage so it survives a full page load.
    persistent: bool,
}

impl MemoryState {
    fn set_current(&mut self, user: Option<User>) {
        if self.persistent {
            match &user {
                Some(u) => match serde_json::to_string(u) {
                    Ok(raw) => persistence::store(OFFLINE_USER_KEY, &raw),
                    Err(e) => tracing::warn!("Failed to serialize offline user: {}", e),
                },
                None => persistence::remove(OFFLINE_USER_KEY),
            }
        }
        self.current = user;
    }

    fn password_user(&mut self, email: &str) -> User {
        self.next_uid += 1;
        User {
            uid: format!("memory-{}", self.next_uid),
            email: Some(email.to_string()),
            display_name: None,
            provider_id: PASSWORD_PROVIDER_ID.to_string(),
        }
    }

    fn federated_outcome(&mut self, provider: FederatedProvider) -> Result<User, AuthError> {
        match &self.federated {
            Some(outcome) => outcome.clone(),
            None => {
                self.next_uid += 1;
                Ok(User {
                    uid: format!("memory-{}", self.next_uid),
                    email: None,
                    display_name: None,
                    provider_id: provider.provider_id().to_string(),
                })
            }
        }
    }
}

/// In-process identity provider for offline demo mode and tests.
///
/// Accounts are email/password pairs. Federated sign-in succeeds with a fresh user
/// unless an outcome is scripted with [`MemoryIdentity::set_federated_outcome`].
#[derive(Clone, Debug, Default)]
pub struct MemoryIdentity {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider whose signed-in user is kept in storage, restoring the one left
    /// by an earlier instance.
    pub fn persistent() -> Self {
        let current = persistence::load(OFFLINE_USER_KEY).and_then(|raw| {
            match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!("Discarding unreadable offline user: {}", e);
                    persistence::remove(OFFLINE_USER_KEY);
                    None
                }
            }
        });

        Self {
            state: Arc::new(Mutex::new(MemoryState {
                current,
                persistent: true,
                ..MemoryState::default()
            })),
        }
    }

    /// Builder method to register an account.
    pub fn with_account(self, email: &str, password: &str) -> Self {
        self.state()
            .accounts
            .insert(email.to_string(), password.to_string());
        self
    }

    /// Make the next provider call fail with `error`.
    pub fn fail_next(&self, error: AuthError) {
        self.state().next_failure = Some(error);
    }

    /// Outcome of every following popup or redirect sign-in.
    pub fn set_federated_outcome(&self, outcome: Result<User, AuthError>) {
        self.state().federated = Some(outcome);
    }

    /// Pretend the browser just came back from a redirect sign-in as `user`.
    pub fn queue_redirect_result(&self, user: User) {
        self.state().pending_redirect = Some(user);
    }

    /// Every call received so far.
    pub fn calls(&self) -> Vec<IdentityCall> {
        self.state().calls.clone()
    }

    pub fn signed_in(&self) -> Option<User> {
        self.state().current.clone()
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record `call` and take the scripted failure, if any.
    fn begin(&self, call: IdentityCall) -> Result<MutexGuard<'_, MemoryState>, AuthError> {
        let mut state = self.state();
        state.calls.push(call);
        match state.next_failure.take() {
            Some(err) => Err(err),
            None => Ok(state),
        }
    }
}

impl IdentityProvider for MemoryIdentity {
    async fn current_user(&self) -> Result<Option<User>, AuthError> {
        Ok(self.begin(IdentityCall::CurrentUser)?.current.clone())
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let mut state = self.begin(IdentityCall::SignInWithPassword {
            email: email.to_string(),
            password: password.to_string(),
        })?;
        let stored = state
            .accounts
            .get(email)
            .cloned()
            .ok_or_else(|| AuthError::from_code(codes::USER_NOT_FOUND))?;
        if stored != password {
            return Err(AuthError::from_code(codes::WRONG_PASSWORD));
        }
        let user = state.password_user(email);
        state.set_current(Some(user.clone()));
        Ok(user)
    }

    async fn create_user_with_password(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let mut state = self.begin(IdentityCall::CreateUser {
            email: email.to_string(),
            password: password.to_string(),
        })?;
        if !email.contains('@') {
            return Err(AuthError::from_code(codes::INVALID_EMAIL));
        }
        if state.accounts.contains_key(email) {
            return Err(AuthError::from_code(codes::EMAIL_ALREADY_IN_USE));
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(AuthError::new(
                codes::WEAK_PASSWORD,
                "Firebase: Password should be at least 6 characters (auth/weak-password).",
            ));
        }
        state
            .accounts
            .insert(email.to_string(), password.to_string());
        let user = state.password_user(email);
        state.set_current(Some(user.clone()));
        Ok(user)
    }

    async fn sign_in_with_popup(&self, provider: FederatedProvider) -> Result<User, AuthError> {
        let mut state = self.begin(IdentityCall::SignInWithPopup(provider))?;
        let user = state.federated_outcome(provider)?;
        state.set_current(Some(user.clone()));
        Ok(user)
    }

    async fn sign_in_with_redirect(&self, provider: FederatedProvider) -> Result<(), AuthError> {
        let mut state = self.begin(IdentityCall::SignInWithRedirect(provider))?;
        let user = state.federated_outcome(provider)?;
        state.pending_redirect = Some(user);
        Ok(())
    }

    async fn redirect_result(&self) -> Result<Option<User>, AuthError> {
        let mut state = self.begin(IdentityCall::RedirectResult)?;
        let user = state.pending_redirect.take();
        if user.is_some() {
            state.set_current(user.clone());
        }
        Ok(user)
    }

    async fn send_password_reset_email(&self, email: &str) -> Result<(), AuthError> {
        let _state = self.begin(IdentityCall::SendPasswordResetEmail {
            email: email.to_string(),
        })?;
        if email.is_empty() {
            return Err(AuthError::from_code(codes::MISSING_EMAIL));
        }
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let mut state = self.begin(IdentityCall::SignOut)?;
        state.set_current(None);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sign_up_then_sign_in() {
        let identity = MemoryIdentity::new();

        let created = identity
            .create_user_with_password("a@b.com", "secret1")
            .await
            .unwrap();
        assert_eq!(identity.signed_in(), Some(created));

        identity.sign_out().await.unwrap();
        assert!(identity.signed_in().is_none());

        let user = identity
            .sign_in_with_password("a@b.com", "secret1")
            .await
            .unwrap();
        assert_eq!(user.email.as_deref(), Some("a@b.com"));
        assert_eq!(identity.current_user().await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn test_rejections_use_sdk_codes() {
        let identity = MemoryIdentity::new().with_account("a@b.com", "secret1");

        let err = identity
            .sign_in_with_password("a@b.com", "nope")
            .await
            .unwrap_err();
        assert_eq!(err.code(), codes::WRONG_PASSWORD);

        let err = identity
            .sign_in_with_password("x@y.com", "secret1")
            .await
            .unwrap_err();
        assert_eq!(err.code(), codes::USER_NOT_FOUND);

        let err = identity
            .create_user_with_password("a@b.com", "another1")
            .await
            .unwrap_err();
        assert_eq!(err.code(), codes::EMAIL_ALREADY_IN_USE);

        let err = identity
            .create_user_with_password("new@b.com", "123")
            .await
            .unwrap_err();
        assert_eq!(err.code(), codes::WEAK_PASSWORD);
    }

    #[tokio::test]
    async fn test_scripted_failure_applies_once() {
        let identity = MemoryIdentity::new().with_account("a@b.com", "secret1");
        identity.fail_next(AuthError::new("auth/internal-error", "boom"));

        let err = identity
            .sign_in_with_password("a@b.com", "secret1")
            .await
            .unwrap_err();
        assert_eq!(err.message(), "boom");
        assert!(identity
            .sign_in_with_password("a@b.com", "secret1")
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_persistent_user_survives_a_new_instance() {
        let first = MemoryIdentity::persistent().with_account("a@b.com", "secret1");
        let user = first
            .sign_in_with_password("a@b.com", "secret1")
            .await
            .unwrap();

        let second = MemoryIdentity::persistent();
        assert_eq!(second.current_user().await.unwrap(), Some(user));

        second.sign_out().await.unwrap();
        assert_eq!(MemoryIdentity::persistent().signed_in(), None);
    }

    #[tokio::test]
    async fn test_plain_instances_share_nothing() {
        let first = MemoryIdentity::new().with_account("a@b.com", "secret1");
        first
            .sign_in_with_password("a@b.com", "secret1")
            .await
            .unwrap();

        assert_eq!(MemoryIdentity::new().signed_in(), None);
        assert_eq!(MemoryIdentity::persistent().signed_in(), None);
    }

    #[tokio::test]
    async fn test_redirect_result_is_consumed_once() {
        let identity = MemoryIdentity::new();
        identity
            .sign_in_with_redirect(FederatedProvider::Google)
            .await
            .unwrap();

        let user = identity.redirect_result().await.unwrap().unwrap();
        assert_eq!(user.provider_id, "google.com");
        assert_eq!(identity.redirect_result().await.unwrap(), None);
        assert_eq!(
            identity.calls(),
            vec![
                IdentityCall::SignInWithRedirect(FederatedProvider::Google),
                IdentityCall::RedirectResult,
                IdentityCall::RedirectResult,
            ]
        );
    }
}
