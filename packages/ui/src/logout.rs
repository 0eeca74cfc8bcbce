//! Logout flow.

use dioxus::prelude::*;

use crate::auth_gate::{use_redirector, LoginRedirect};
use crate::stores::{use_api, use_client_config, use_project_store, use_user_store};

/// Button to log out the current user.
///
/// Tells the server, drops the local token, clears both stores and sends the
/// visitor to the login page. A failed server call is logged and the local
/// logout goes ahead anyway.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let api = use_api();
    let config = use_client_config();
    let redirector = use_redirector();
    let mut user_store = use_user_store();
    let mut project_store = use_project_store();

    let onclick = move |_| {
        let api = api.clone();
        let redirector = redirector.clone();
        let redirect = LoginRedirect::from_config(&config.auth).with_message("You have been logged out");
        async move {
            if let Err(e) = api.logout().await {
                tracing::warn!("Logout request failed: {}", e);
            }
            user_store.write().clear_user();
            project_store.write().clear_all();
            redirector.redirect(redirect);
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
