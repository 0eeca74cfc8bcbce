//! Account registration.

use api::RegisterRequest;
use dioxus::prelude::*;
use ui::use_api;

use crate::Route;

#[component]
pub fn Register() -> Element {
    let api = use_api();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            submitting.set(true);
            let request = RegisterRequest {
                email: email().trim().to_string(),
                password: password(),
                name: name().trim().to_string(),
            };
            match api.register(&request).await {
                Ok(reply) => {
                    tracing::info!("Registered {}", reply.user.email);
                    let message = if reply.email_verification_required {
                        "Check your email to verify your account, then log in"
                    } else {
                        "Account created, please log in"
                    };
                    nav.replace(Route::Login {
                        message: message.to_string(),
                    });
                }
                Err(e) => {
                    tracing::warn!("Registration failed: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
            submitting.set(false);
        }
    };

    rsx! {
        div {
            class: "login-container",
            h1 { "Create an account" }

            if let Some(message) = error() {
                p { class: "login-error", "{message}" }
            }

            form {
                class: "login-form",
                onsubmit: onsubmit,
                label { "Name" }
                input {
                    r#type: "text",
                    value: name(),
                    oninput: move |evt| name.set(evt.value()),
                }
                label { "Email" }
                input {
                    r#type: "email",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }
                label { "Password" }
                input {
                    r#type: "password",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    class: "primary",
                    disabled: submitting(),
                    "Create account"
                }
            }

            p {
                class: "login-alt",
                "Already registered? "
                Link {
                    to: Route::Login { message: String::new() },
                    "Sign in"
                }
            }
        }
    }
}
