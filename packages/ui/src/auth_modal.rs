use dioxus::prelude::*;

use api::IdentityProvider;

use crate::auth::{use_auth, use_auth_config, use_identity, AuthStatus};
use crate::auth_flow::{Action, AuthFlow, AuthForm, ModalMode, Outcome};
use crate::icons::{FaGoogle, FaUser, FaXmark};
use crate::navigation::BrowserNavigator;
use crate::views::ModalOverlay;
use crate::Icon;

/// Sign-in / sign-up / password-reset dialog.
///
/// Renders nothing while `is_open` is false. It is mounted either way, so the check
/// for a pending redirect sign-in runs as soon as the page loads.
#[component]
pub fn AuthModal(is_open: bool, on_close: EventHandler<()>) -> Element {
    let identity = use_identity();
    let config = use_auth_config();
    let guest_enabled = config.guest.is_some();
    let mut auth_form = use_signal(AuthForm::default);
    let mut loading = use_signal(|| false);
    let mut status = use_auth();

    let dispatch = use_callback(move |action: Action| {
        let identity = identity.clone();
        let config = config.clone();
        loading.set(true);
        spawn(async move {
            let outcome = AuthFlow::new(&identity, &BrowserNavigator, &config)
                .run(action)
                .await;
            if outcome == Outcome::Redirected {
                if let Ok(user) = identity.current_user().await {
                    status.set(AuthStatus::from_user(user));
                }
            }
            loading.set(false);
            auth_form.write().record(outcome);
        });
    });

    use_effect(move || dispatch.call(Action::CheckRedirect));

    if !is_open {
        return rsx! {};
    }

    let state = auth_form();
    let mode = state.mode;
    let (prompt, toggle_label) = mode.toggle_prompt();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let submission = auth_form.write().begin_submit();
        if let Some(submission) = submission {
            dispatch.call(Action::Submit(submission));
        }
    };

    rsx! {
        ModalOverlay {
            on_close: on_close,
            div {
                class: "auth-modal",

                button {
                    class: "auth-modal-close",
                    r#type: "button",
                    title: "Close",
                    onclick: move |_| on_close.call(()),
                    Icon { icon: FaXmark, width: 20, height: 20 }
                }

                h2 { class: "auth-modal-title", "{mode.title()}" }

                if mode == ModalMode::Login && guest_enabled {
                    button {
                        class: "auth-modal-provider",
                        r#type: "button",
                        disabled: loading(),
                        onclick: move |_| dispatch.call(Action::Guest),
                        Icon { class: "auth-modal-provider-icon", icon: FaUser, width: 16, height: 16 }
                        "Login as a Guest"
                    }
                }

                if let Some(google_label) = mode.google_label() {
                    button {
                        class: "auth-modal-provider",
                        r#type: "button",
                        disabled: loading(),
                        onclick: move |_| dispatch.call(Action::Google),
                        Icon { class: "auth-modal-provider-icon", icon: FaGoogle, width: 16, height: 16 }
                        "{google_label}"
                    }

                    div {
                        class: "auth-modal-divider",
                        span { "or" }
                    }
                }

                form {
                    class: "auth-modal-form",
                    onsubmit: handle_submit,

                    input {
                        class: "auth-modal-input",
                        r#type: "email",
                        placeholder: "Email Address *",
                        required: true,
                        value: "{state.email}",
                        oninput: move |evt: FormEvent| auth_form.write().email = evt.value(),
                    }

                    if mode != ModalMode::Forgot {
                        input {
                            class: "auth-modal-input",
                            r#type: "password",
                            placeholder: "Password *",
                            required: true,
                            value: "{state.password}",
                            oninput: move |evt: FormEvent| auth_form.write().password = evt.value(),
                        }
                    }

                    if mode == ModalMode::Signup {
                        input {
                            class: "auth-modal-input",
                            r#type: "password",
                            placeholder: "Confirm Password *",
                            required: true,
                            value: "{state.confirm_password}",
                            oninput: move |evt: FormEvent| auth_form.write().confirm_password = evt.value(),
                        }
                    }

                    if !state.error.is_empty() {
                        p { class: "auth-modal-error", "{state.error}" }
                    }

                    button {
                        class: "auth-modal-submit",
                        r#type: "submit",
                        disabled: loading(),
                        "{mode.submit_label()}"
                    }
                }

                if mode == ModalMode::Login {
                    p {
                        class: "auth-modal-footer",
                        button {
                            class: "auth-modal-link",
                            r#type: "button",
                            onclick: move |_| auth_form.write().forgot_password(),
                            "Forgot your password?"
                        }
                    }
                }

                p {
                    class: "auth-modal-footer",
                    "{prompt}"
                    button {
                        class: "auth-modal-link",
                        r#type: "button",
                        onclick: move |_| auth_form.write().toggle_mode(),
                        "{toggle_label}"
                    }
                }
            }
        }
    }
}
