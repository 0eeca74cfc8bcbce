//! Profile settings for the signed-in user.

use dioxus::prelude::*;
use store::UserPatch;
use ui::{use_api, use_session_guard, use_user_store};

#[component]
pub fn Settings() -> Element {
    let api = use_api();
    let session = use_session_guard();
    let mut user_store = use_user_store();
    let current = user_store.read().user().cloned();

    let mut name = use_signal(|| current.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let mut avatar_url = use_signal(|| {
        current
            .as_ref()
            .and_then(|u| u.avatar_url.clone())
            .unwrap_or_default()
    });
    let mut saved = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let session = session.clone();
        async move {
            let avatar = avatar_url().trim().to_string();
            let patch = UserPatch {
                name: Some(name().trim().to_string()),
                avatar_url: Some((!avatar.is_empty()).then_some(avatar)),
                ..UserPatch::default()
            };
            saved.set(false);
            user_store.write().set_loading(true);
            let result = api.update_profile(&patch).await;
            user_store.write().set_loading(false);
            match result {
                Ok(user) => {
                    let mut store = user_store.write();
                    store.update_user(UserPatch::from(user));
                    store.set_error(None);
                    saved.set(true);
                }
                Err(e) if session.check(&e) => {}
                Err(e) => {
                    tracing::warn!("Profile update failed: {}", e);
                    user_store.write().set_error(Some(e.to_string()));
                }
            }
        }
    };

    let state = user_store.read().state().clone();

    rsx! {
        div {
            class: "settings",
            h1 { "Profile" }

            if let Some(user) = state.user.as_ref() {
                p { class: "description", "Signed in as {user.email}" }
            }

            if let Some(error) = state.error.clone() {
                p { class: "error", "{error}" }
            }

            if saved() {
                p { class: "saved", "Profile saved" }
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
                label { "Avatar URL" }
                input {
                    r#type: "url",
                    value: avatar_url(),
                    oninput: move |evt| avatar_url.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    class: "primary",
                    disabled: state.is_loading,
                    "Save"
                }
            }
        }
    }
}
