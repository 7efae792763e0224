//! # Hosted identity service client (Identity Toolkit REST)
//!
//! [`FirebaseAuth`] implements [`IdentityProvider`] against the `accounts:*` endpoints:
//!
//! | Operation | Endpoint |
//! |-----------|----------|
//! | password sign-in | `accounts:signInWithPassword` |
//! | account creation | `accounts:signUp` |
//! | reset email | `accounts:sendOobCode` with `requestType = PASSWORD_RESET` |
//! | federated sign-in | `accounts:createAuthUri`, then `accounts:signInWithIdp` with the URL the provider returned to |
//!
//! Every call posts JSON to `{endpoint}/accounts:{method}?key={api_key}`. Non-2xx
//! responses carry `{"error": {"message": "EMAIL_NOT_FOUND", ...}}`, which is turned into
//! an [`AuthError`] with the matching `auth/...` code.
//!
//! The signed-in [`Session`] is kept in memory and mirrored to browser local storage,
//! so a full page load after sign-in comes back authenticated. Federated sign-in needs a
//! browser window; native builds reject it.

mod browser;
mod rest;

use std::sync::{Arc, Mutex, PoisonError};

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};

use crate::config::IdentityConfig;
use crate::error::{codes, AuthError};
use crate::models::session::SESSION_STORAGE_KEY;
use crate::models::user::PASSWORD_PROVIDER_ID;
use crate::models::{Session, User};
use crate::persistence;
use crate::provider::{FederatedProvider, IdentityProvider};
use rest::{
    CreateAuthUriRequest, CreateAuthUriResponse, ErrorEnvelope, OobCodeRequest, PasswordRequest,
    SignInWithIdpRequest, TokenResponse,
};

/// Storage key for the [`PendingRedirect`] of a redirect sign-in in flight.
const PENDING_REDIRECT_KEY: &str = "summarist.pendingRedirect";

/// What a redirect sign-in needs once the browser comes back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct PendingRedirect {
    /// `createAuthUri` session id.
    session_id: String,
    provider: FederatedProvider,
}

/// Identity Toolkit client.
#[derive(Clone, Debug)]
pub struct FirebaseAuth {
    config: IdentityConfig,
    http: reqwest::Client,
    session: Arc<Mutex<Option<Session>>>,
}

impl FirebaseAuth {
    /// Create a client, restoring a persisted session if there is one.
    pub fn new(config: IdentityConfig) -> Self {
        let session = persistence::load(SESSION_STORAGE_KEY).and_then(|raw| {
            match serde_json::from_str::<Session>(&raw) {
                Ok(session) => Some(session),
                Err(e) => {
                    tracing::warn!("Discarding unreadable session: {}", e);
                    persistence::remove(SESSION_STORAGE_KEY);
                    None
                }
            }
        });

        Self {
            config,
            http: reqwest::Client::new(),
            session: Arc::new(Mutex::new(session)),
        }
    }

    /// The current session, including tokens.
    pub fn session(&self) -> Option<Session> {
        self.session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_session(&self, session: Option<Session>) {
        match &session {
            Some(s) => match serde_json::to_string(s) {
                Ok(raw) => persistence::store(SESSION_STORAGE_KEY, &raw),
                Err(e) => tracing::warn!("Failed to serialize session: {}", e),
            },
            None => persistence::remove(SESSION_STORAGE_KEY),
        }
        *self.session.lock().unwrap_or_else(PoisonError::into_inner) = session;
    }

    fn accounts_url(&self, method: &str) -> String {
        format!(
            "{}/accounts:{}",
            self.config.endpoint.trim_end_matches('/'),
            method
        )
    }

    async fn call<B, R>(&self, method: &str, body: &B) -> Result<R, AuthError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.accounts_url(method))
            .query(&[("key", self.config.api_key.as_str())])
            .json(body)
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(response.json::<R>().await?);
        }

        let status = response.status();
        let text = response.text().await?;
        match serde_json::from_str::<ErrorEnvelope>(&text) {
            Ok(envelope) => {
                tracing::warn!("accounts:{} rejected: {}", method, envelope.error.message);
                Err(AuthError::from_rest_message(&envelope.error.message))
            }
            Err(_) => {
                tracing::warn!("accounts:{} failed with HTTP {}", method, status);
                Err(AuthError::from_code(codes::INTERNAL_ERROR))
            }
        }
    }

    /// Store the tokens from a sign-in response and return its user.
    fn establish(&self, response: TokenResponse, provider_id: &str) -> User {
        let user = User {
            uid: response.local_id,
            email: response.email,
            display_name: response.display_name.filter(|name| !name.is_empty()),
            provider_id: response
                .provider_id
                .unwrap_or_else(|| provider_id.to_string()),
        };
        self.set_session(Some(Session {
            user: user.clone(),
            id_token: response.id_token,
            refresh_token: response.refresh_token,
            expires_in: response.expires_in.and_then(|secs| secs.parse().ok()),
        }));
        tracing::info!("Signed in {} via {}", user.uid, user.provider_id);
        user
    }

    /// Where the federated provider sends the browser back to.
    fn continue_uri(&self) -> Result<String, AuthError> {
        if !self.config.continue_uri.is_empty() {
            return Ok(self.config.continue_uri.clone());
        }
        browser::current_page().ok_or_else(|| AuthError::from_code(codes::OPERATION_NOT_SUPPORTED))
    }

    async fn create_auth_uri(
        &self,
        provider: FederatedProvider,
        continue_uri: &str,
    ) -> Result<CreateAuthUriResponse, AuthError> {
        self.call(
            "createAuthUri",
            &CreateAuthUriRequest {
                provider_id: provider.provider_id(),
                continue_uri,
            },
        )
        .await
    }

    async fn sign_in_with_idp(
        &self,
        provider: FederatedProvider,
        request_uri: &str,
        session_id: &str,
    ) -> Result<User, AuthError> {
        let response: TokenResponse = self
            .call(
                "signInWithIdp",
                &SignInWithIdpRequest {
                    request_uri,
                    session_id,
                    return_secure_token: true,
                    return_idp_credential: true,
                },
            )
            .await?;
        Ok(self.establish(response, provider.provider_id()))
    }

    async fn password_call(&self, method: &str, email: &str, password: &str) -> Result<User, AuthError> {
        let response: TokenResponse = self
            .call(
                method,
                &PasswordRequest {
                    email,
                    password,
                    return_secure_token: true,
                },
            )
            .await?;
        Ok(self.establish(response, PASSWORD_PROVIDER_ID))
    }
}

impl IdentityProvider for FirebaseAuth {
    async fn current_user(&self) -> Result<Option<User>, AuthError> {
        Ok(self.session().map(|s| s.user))
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.password_call("signInWithPassword", email, password).await
    }

    async fn create_user_with_password(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.password_call("signUp", email, password).await
    }

    async fn sign_in_with_popup(&self, provider: FederatedProvider) -> Result<User, AuthError> {
        let continue_uri = self.continue_uri()?;
        let auth = self.create_auth_uri(provider, &continue_uri).await?;
        let request_uri = browser::run_popup(&auth.auth_uri, &continue_uri).await?;
        self.sign_in_with_idp(provider, &request_uri, &auth.session_id)
            .await
    }

    async fn sign_in_with_redirect(&self, provider: FederatedProvider) -> Result<(), AuthError> {
        let continue_uri = self.continue_uri()?;
        let auth = self.create_auth_uri(provider, &continue_uri).await?;
        let pending = PendingRedirect {
            session_id: auth.session_id,
            provider,
        };
        persistence::store(PENDING_REDIRECT_KEY, &serde_json::to_string(&pending)?);
        browser::navigate(&auth.auth_uri)
    }

    async fn redirect_result(&self) -> Result<Option<User>, AuthError> {
        let Some(raw) = persistence::load(PENDING_REDIRECT_KEY) else {
            return Ok(None);
        };
        persistence::remove(PENDING_REDIRECT_KEY);

        let pending = match serde_json::from_str::<PendingRedirect>(&raw) {
            Ok(pending) => pending,
            Err(e) => {
                tracing::warn!("Discarding unreadable pending redirect: {}", e);
                return Ok(None);
            }
        };
        let Some(request_uri) = browser::current_href() else {
            return Ok(None);
        };
        self.sign_in_with_idp(pending.provider, &request_uri, &pending.session_id)
            .await
            .map(Some)
    }

    async fn send_password_reset_email(&self, email: &str) -> Result<(), AuthError> {
        let _: IgnoredAny = self
            .call(
                "sendOobCode",
                &OobCodeRequest {
                    request_type: "PASSWORD_RESET",
                    email,
                },
            )
            .await?;
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.set_session(None);
        tracing::info!("Signed out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> FirebaseAuth {
        FirebaseAuth::new(IdentityConfig {
            api_key: "test-key".to_string(),
            endpoint: server.uri(),
            continue_uri: String::new(),
        })
    }

    fn token_body() -> serde_json::Value {
        json!({
            "kind": "identitytoolkit#VerifyPasswordResponse",
            "localId": "uid-1",
            "email": "a@b.com",
            "displayName": "",
            "idToken": "id-token",
            "refreshToken": "refresh-token",
            "expiresIn": "3600",
            "registered": true
        })
    }

    #[tokio::test]
    async fn test_password_sign_in_establishes_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/accounts:signInWithPassword"))
            .and(query_param("key", "test-key"))
            .and(body_partial_json(json!({
                "email": "a@b.com",
                "password": "x",
                "returnSecureToken": true
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
            .expect(1)
            .mount(&server)
            .await;

        let auth = client(&server);
        let user = auth.sign_in_with_password("a@b.com", "x").await.unwrap();

        assert_eq!(user.uid, "uid-1");
        assert_eq!(user.email.as_deref(), Some("a@b.com"));
        assert_eq!(user.display_name, None);
        assert_eq!(user.provider_id, PASSWORD_PROVIDER_ID);

        let session = auth.session().unwrap();
        assert_eq!(session.id_token, "id-token");
        assert_eq!(session.expires_in, Some(3600));
        assert_eq!(auth.current_user().await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn test_rejection_maps_to_sdk_code() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/accounts:signInWithPassword"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {
                    "code": 400,
                    "message": "INVALID_PASSWORD",
                    "errors": [{ "message": "INVALID_PASSWORD", "domain": "global", "reason": "invalid" }]
                }
            })))
            .mount(&server)
            .await;

        let auth = client(&server);
        let err = auth.sign_in_with_password("a@b.com", "bad").await.unwrap_err();

        assert_eq!(err.code(), codes::WRONG_PASSWORD);
        assert_eq!(err.message(), "Firebase: Error (auth/wrong-password).");
        assert!(auth.session().is_none());
    }

    #[tokio::test]
    async fn test_unreadable_error_body_is_internal_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/accounts:signUp"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
            .mount(&server)
            .await;

        let err = client(&server)
            .create_user_with_password("a@b.com", "secret1")
            .await
            .unwrap_err();
        assert_eq!(err.code(), codes::INTERNAL_ERROR);
    }

    #[tokio::test]
    async fn test_sign_up_uses_sign_up_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/accounts:signUp"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
            .expect(1)
            .mount(&server)
            .await;

        let user = client(&server)
            .create_user_with_password("a@b.com", "secret1")
            .await
            .unwrap();
        assert_eq!(user.uid, "uid-1");
    }

    #[tokio::test]
    async fn test_password_reset_sends_oob_code_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/accounts:sendOobCode"))
            .and(body_partial_json(json!({
                "requestType": "PASSWORD_RESET",
                "email": "a@b.com"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "email": "a@b.com" })))
            .expect(1)
            .mount(&server)
            .await;

        client(&server)
            .send_password_reset_email("a@b.com")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_sign_out_clears_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/accounts:signInWithPassword"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
            .mount(&server)
            .await;

        let auth = client(&server);
        auth.sign_in_with_password("a@b.com", "x").await.unwrap();
        auth.sign_out().await.unwrap();

        assert!(auth.session().is_none());
        assert_eq!(auth.current_user().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_federated_sign_in_needs_a_browser() {
        let server = MockServer::start().await;
        let auth = client(&server);

        let err = auth
            .sign_in_with_popup(FederatedProvider::Google)
            .await
            .unwrap_err();
        assert_eq!(err.code(), codes::OPERATION_NOT_SUPPORTED);
        assert_eq!(auth.redirect_result().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_redirect_sign_in_remembers_provider() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/accounts:createAuthUri"))
            .and(body_partial_json(json!({ "providerId": "google.com" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "authUri": "https://accounts.google.com/o/oauth2/auth?x=1",
                "sessionId": "session-1"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let auth = FirebaseAuth::new(IdentityConfig {
            api_key: "test-key".to_string(),
            endpoint: server.uri(),
            continue_uri: "http://localhost:8080/".to_string(),
        });

        // Leaving the page needs a browser; the record is written before that.
        let err = auth
            .sign_in_with_redirect(FederatedProvider::Google)
            .await
            .unwrap_err();
        assert_eq!(err.code(), codes::OPERATION_NOT_SUPPORTED);

        let raw = persistence::load(PENDING_REDIRECT_KEY).unwrap();
        let pending: PendingRedirect = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            pending,
            PendingRedirect {
                session_id: "session-1".to_string(),
                provider: FederatedProvider::Google,
            }
        );

        // Consumed even though there is no page URL to finish with.
        assert_eq!(auth.redirect_result().await.unwrap(), None);
        assert_eq!(persistence::load(PENDING_REDIRECT_KEY), None);
    }

    #[tokio::test]
    async fn test_idp_user_falls_back_to_requested_provider() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/accounts:signInWithIdp"))
            .and(body_partial_json(json!({
                "requestUri": "http://localhost:8080/?code=abc",
                "sessionId": "session-1"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
            .expect(1)
            .mount(&server)
            .await;

        let auth = client(&server);
        let user = auth
            .sign_in_with_idp(
                FederatedProvider::Google,
                "http://localhost:8080/?code=abc",
                "session-1",
            )
            .await
            .unwrap();

        assert_eq!(user.provider_id, FederatedProvider::Google.provider_id());
        assert_eq!(auth.session().unwrap().user, user);
    }
}
