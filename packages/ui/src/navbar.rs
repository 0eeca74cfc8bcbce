use dioxus::prelude::*;

use crate::logout::LogoutButton;
use crate::stores::use_user_store;

/// First name to greet a user with.
///
/// Uses the first word of `name` unless it is empty or just the email again,
/// in which case it is derived from the email's local part (`ada.l@x` → `ada`).
pub fn first_name(name: &str, email: &str) -> String {
    let name = name.trim();
    if !name.is_empty() && name != email {
        if let Some(first) = name.split_whitespace().next() {
            return first.to_string();
        }
    }
    email
        .split('@')
        .next()
        .and_then(|local| local.split('.').next())
        .filter(|s| !s.is_empty())
        .unwrap_or("User")
        .to_string()
}

/// One upper-case letter for the avatar fallback.
pub fn initials(name: &str, email: &str) -> String {
    first_name(name, email)
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// Top bar with the signed-in user and a logout button.
#[component]
pub fn Navbar(children: Element) -> Element {
    let user_store = use_user_store();
    let user = user_store().user().cloned();

    rsx! {
        div {
            class: "navbar",
            style: "display: flex; align-items: center; justify-content: space-between; padding: 0 1.5rem; height: 4rem; border-bottom: 1px solid #e5e7eb;",
            div {
                class: "navbar-links",
                style: "display: flex; gap: 1rem;",
                {children}
            }
            if let Some(u) = user {
                div {
                    class: "navbar-user",
                    style: "display: flex; align-items: center; gap: 0.75rem;",
                    if let Some(ref avatar) = u.avatar_url {
                        img {
                            class: "navbar-avatar",
                            src: "{avatar}",
                            alt: "Avatar",
                            width: "32",
                            height: "32",
                        }
                    } else {
                        span {
                            class: "navbar-avatar navbar-avatar--initials",
                            "{initials(&u.name, &u.email)}"
                        }
                    }
                    span {
                        class: "navbar-user-name",
                        title: "{u.display_name()}",
                        "{first_name(u.display_name(), &u.email)}"
                    }
                    LogoutButton { class: "navbar-logout" }
                }
            }
        }
    }
}
