//! # Auth modal state and provider interplay
//!
//! [`AuthForm`] is everything the modal shows: mode, the three input fields and one
//! error line. [`AuthFlow`] turns a user action into identity-provider calls and page
//! effects and reports an [`Outcome`] that the form records.
//!
//! Rules:
//!
//! - every submit clears the error before anything else happens;
//! - local validation (password mismatch, empty reset email) never reaches the provider;
//! - any success performs exactly one full navigation to [`AuthConfig::redirect_url`];
//! - provider errors are shown verbatim, except a popup the user closed, which is
//!   silently ignored;
//! - toggling the mode clears the error.

use api::error::AuthError;
use api::{AuthConfig, FederatedProvider, IdentityProvider};

use crate::navigation::Navigate;

pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const EMAIL_REQUIRED: &str = "Please enter your email address.";
pub const RESET_EMAIL_SENT: &str = "Password reset email sent!";

/// Which form the modal shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalMode {
    #[default]
    Login,
    Signup,
    Forgot,
}

impl ModalMode {
    /// Footer toggle: login goes to signup, everything else back to login.
    pub fn toggled(self) -> Self {
        match self {
            ModalMode::Login => ModalMode::Signup,
            ModalMode::Signup | ModalMode::Forgot => ModalMode::Login,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ModalMode::Login => "Login to Summarist",
            ModalMode::Signup => "Sign up for Summarist",
            ModalMode::Forgot => "Reset your password",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            ModalMode::Login => "Login",
            ModalMode::Signup => "Sign Up",
            ModalMode::Forgot => "Send reset email",
        }
    }

    /// Label of the Google button; the reset form has none.
    pub fn google_label(self) -> Option<&'static str> {
        match self {
            ModalMode::Login => Some("Login with Google"),
            ModalMode::Signup => Some("Sign up with Google"),
            ModalMode::Forgot => None,
        }
    }

    /// Prompt and link text of the footer toggle.
    pub fn toggle_prompt(self) -> (&'static str, &'static str) {
        match self {
            ModalMode::Login => ("Don't have an account? ", "Sign up"),
            ModalMode::Signup | ModalMode::Forgot => ("Already have an account? ", "Login"),
        }
    }
}

/// A validated form submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    SignIn { email: String, password: String },
    SignUp { email: String, password: String },
    ResetPassword { email: String },
}

/// A user action the modal hands to [`AuthFlow`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Submit(Submission),
    Google,
    Guest,
    /// Finish a redirect-based federated sign-in, if one is pending.
    CheckRedirect,
}

/// How an action ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The page is being replaced.
    Redirected,
    /// Nothing to show.
    Idle,
    /// Message for the error line.
    Failed(String),
}

impl From<AuthError> for Outcome {
    fn from(e: AuthError) -> Self {
        Outcome::Failed(e.message().to_string())
    }
}

/// Modal state: mode, input fields and the error line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthForm {
    pub mode: ModalMode,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub error: String,
}

impl AuthForm {
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.error.clear();
    }

    pub fn forgot_password(&mut self) {
        self.mode = ModalMode::Forgot;
    }

    /// Start a submit: clear the error and validate locally. On a validation failure
    /// the error is set and `None` is returned.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        self.error.clear();
        match self.submission() {
            Ok(submission) => Some(submission),
            Err(message) => {
                self.error = message.to_string();
                None
            }
        }
    }

    fn submission(&self) -> Result<Submission, &'static str> {
        match self.mode {
            ModalMode::Login => Ok(Submission::SignIn {
                email: self.email.clone(),
                password: self.password.clone(),
            }),
            ModalMode::Signup => {
                if self.password != self.confirm_password {
                    return Err(PASSWORD_MISMATCH);
                }
                Ok(Submission::SignUp {
                    email: self.email.clone(),
                    password: self.password.clone(),
                })
            }
            ModalMode::Forgot => {
                if self.email.is_empty() {
                    return Err(EMAIL_REQUIRED);
                }
                Ok(Submission::ResetPassword {
                    email: self.email.clone(),
                })
            }
        }
    }

    pub fn record(&mut self, outcome: Outcome) {
        if let Outcome::Failed(message) = outcome {
            self.error = message;
        }
    }
}

/// Runs actions against an identity provider.
pub struct AuthFlow<'a, P, N> {
    identity: &'a P,
    navigator: &'a N,
    config: &'a AuthConfig,
}

impl<'a, P: IdentityProvider, N: Navigate> AuthFlow<'a, P, N> {
    pub fn new(identity: &'a P, navigator: &'a N, config: &'a AuthConfig) -> Self {
        Self {
            identity,
            navigator,
            config,
        }
    }

    pub async fn run(&self, action: Action) -> Outcome {
        match action {
            Action::Submit(submission) => self.submit(submission).await,
            Action::Google => self.google().await,
            Action::Guest => self.guest().await,
            Action::CheckRedirect => self.check_redirect().await,
        }
    }

    async fn submit(&self, submission: Submission) -> Outcome {
        match submission {
            Submission::SignIn { email, password } => {
                self.finish(self.identity.sign_in_with_password(&email, &password).await)
            }
            Submission::SignUp { email, password } => self.finish(
                self.identity
                    .create_user_with_password(&email, &password)
                    .await,
            ),
            Submission::ResetPassword { email } => {
                match self.identity.send_password_reset_email(&email).await {
                    Ok(()) => {
                        self.navigator.alert(RESET_EMAIL_SENT);
                        Outcome::Idle
                    }
                    Err(e) => e.into(),
                }
            }
        }
    }

    async fn google(&self) -> Outcome {
        match self.identity.sign_in_with_popup(FederatedProvider::Google).await {
            Ok(_) => self.redirect(),
            Err(e) if e.is_popup_closed() => Outcome::Idle,
            Err(e) if e.is_popup_blocked() => {
                tracing::info!("Popup blocked, continuing sign-in by redirect");
                match self
                    .identity
                    .sign_in_with_redirect(FederatedProvider::Google)
                    .await
                {
                    Ok(()) => Outcome::Idle,
                    Err(e) => e.into(),
                }
            }
            Err(e) => e.into(),
        }
    }

    async fn guest(&self) -> Outcome {
        let Some(guest) = &self.config.guest else {
            tracing::warn!("Guest login requested but no guest account is configured");
            return Outcome::Idle;
        };
        self.finish(
            self.identity
                .sign_in_with_password(&guest.email, &guest.password)
                .await,
        )
    }

    async fn check_redirect(&self) -> Outcome {
        match self.identity.redirect_result().await {
            Ok(Some(_)) => self.redirect(),
            Ok(None) => Outcome::Idle,
            Err(e) => e.into(),
        }
    }

    fn finish<T>(&self, result: Result<T, AuthError>) -> Outcome {
        match result {
            Ok(_) => self.redirect(),
            Err(e) => {
                tracing::warn!("Sign-in rejected: {}", e.code());
                e.into()
            }
        }
    }

    fn redirect(&self) -> Outcome {
        self.navigator.assign(&self.config.redirect_url);
        Outcome::Redirected
    }
}
