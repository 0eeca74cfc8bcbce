//! Login page with email and password.

use dioxus::prelude::*;
use ui::{use_api, use_user_store};

use crate::Route;

/// Login page component. `message` comes from the gate that sent the visitor here.
#[component]
pub fn Login(message: String) -> Element {
    let api = use_api();
    let mut user_store = use_user_store();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            user_store.write().set_loading(true);
            match api.sign_in(&email(), &password()).await {
                Ok(user) => {
                    tracing::info!("Logged in as {}", user.email);
                    user_store.write().set_user(Some(user));
                    nav.replace(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::warn!("Login failed: {}", e);
                    user_store.write().set_error(Some(e.to_string()));
                }
            }
            user_store.write().set_loading(false);
        }
    };

    let state = user_store.read().state().clone();

    rsx! {
        div {
            class: "login-container",
            h1 { "Sign in" }

            if !message.is_empty() {
                p { class: "login-message", "{message}" }
            }

            if let Some(error) = state.error.clone() {
                p { class: "login-error", "{error}" }
            }

            form {
                class: "login-form",
                onsubmit: onsubmit,
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
                    disabled: state.is_loading,
                    if state.is_loading { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "login-alt",
                "No account yet? "
                Link { to: Route::Register {}, "Create one" }
            }
        }
    }
}
