use api::IdentityProvider;
use dioxus::prelude::*;

use crate::auth::{use_auth, use_identity, AuthStatus};
use crate::auth_modal::AuthModal;
use crate::icons::FaSpinner;
use crate::Icon;

/// What the button shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonFace {
    /// Disabled, with a spinner.
    Busy,
    SignOut,
    Label,
}

/// Face of an auth-aware button for `status`.
pub fn button_face(status: &AuthStatus, signing_out: bool) -> ButtonFace {
    if status.is_loading() || signing_out {
        ButtonFace::Busy
    } else if status.user().is_some() {
        ButtonFace::SignOut
    } else {
        ButtonFace::Label
    }
}

/// Sign out and return the status to show next. A failure is logged and `current`
/// is kept.
pub async fn sign_out_status<P: IdentityProvider>(identity: &P, current: AuthStatus) -> AuthStatus {
    match identity.sign_out().await {
        Ok(()) => AuthStatus::Unauthenticated,
        Err(e) => {
            tracing::error!("Error signing out: {}", e);
            current
        }
    }
}

/// Button that opens the auth modal.
///
/// With `auth_aware` it follows the auth status instead: disabled with a spinner
/// while the session resolves or a sign-out is running, "Sign Out" when signed in.
#[component]
pub fn LoginButton(
    #[props(default = "Login".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    #[props(default = false)] auth_aware: bool,
) -> Element {
    let mut auth_state = use_auth();
    let identity = use_identity();
    let mut modal_open = use_signal(|| false);
    let mut signing_out = use_signal(|| false);

    let face = if auth_aware {
        button_face(&auth_state.read(), signing_out())
    } else {
        ButtonFace::Label
    };

    let onclick = move |_| {
        if face != ButtonFace::SignOut {
            modal_open.set(true);
            return;
        }
        let identity = identity.clone();
        signing_out.set(true);
        spawn(async move {
            let next = sign_out_status(&identity, auth_state()).await;
            if next != auth_state() {
                auth_state.set(next);
            }
            signing_out.set(false);
        });
    };

    let content = match face {
        ButtonFace::Busy => rsx! {
            Icon { class: "spin", icon: FaSpinner, width: 16, height: 16 }
        },
        ButtonFace::SignOut => rsx! { "Sign Out" },
        ButtonFace::Label => rsx! { "{label}" },
    };

    rsx! {
        button {
            class: "login-button {class}",
            disabled: face == ButtonFace::Busy,
            onclick: onclick,
            {content}
        }
        AuthModal {
            is_open: modal_open(),
            on_close: move |_| modal_open.set(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::error::codes;
    use api::{AuthError, IdentityCall, MemoryIdentity, User};

    fn user() -> User {
        User {
            uid: "u1".to_string(),
            email: Some("a@b.com".to_string()),
            display_name: None,
            provider_id: "password".to_string(),
        }
    }

    #[test]
    fn test_face_follows_status() {
        let user = user();

        assert_eq!(button_face(&AuthStatus::Unknown, false), ButtonFace::Busy);
        assert_eq!(button_face(&AuthStatus::Unauthenticated, false), ButtonFace::Label);
        assert_eq!(
            button_face(&AuthStatus::Authenticated(user.clone()), false),
            ButtonFace::SignOut
        );
        assert_eq!(
            button_face(&AuthStatus::Authenticated(user), true),
            ButtonFace::Busy
        );
    }

    #[tokio::test]
    async fn test_sign_out_clears_status() {
        let identity = MemoryIdentity::new();
        let status = sign_out_status(&identity, AuthStatus::Authenticated(user())).await;

        assert_eq!(status, AuthStatus::Unauthenticated);
        assert_eq!(identity.calls(), vec![IdentityCall::SignOut]);
    }

    #[tokio::test]
    async fn test_failed_sign_out_keeps_status() {
        let identity = MemoryIdentity::new();
        identity.fail_next(AuthError::from_code(codes::NETWORK_REQUEST_FAILED));

        let signed_in = AuthStatus::Authenticated(user());
        let status = sign_out_status(&identity, signed_in.clone()).await;

        assert_eq!(status, signed_in);
        assert_eq!(button_face(&status, false), ButtonFace::SignOut);
    }
}
