//! # Auth gates for protected views
//!
//! A gate wraps a view and lets it render only when an auth token is present
//! in client storage. Presence is all that is checked: validity, expiry and
//! server sessions are the backend's business, which answers a bad token with
//! a 401 that the API client turns into a cleared token.
//!
//! Two variants:
//!
//! | Component | Before the check | No token | Token |
//! |-----------|------------------|----------|-------|
//! | [`AuthGate`] | [`LoadingScreen`] | redirect, keeps showing the loading screen | renders children |
//! | [`SimpleAuthGate`] | nothing | redirect, keeps rendering nothing | renders children |
//!
//! Each gate checks exactly once per mount. Its effect reads no signals, so
//! nothing re-triggers it. A redirect is expected to unmount the gate.
//!
//! The wrapped view is passed as `children`, built by the caller with its own
//! props, so a gate works with any view and never touches those props. In the
//! router the gates are applied as layouts around an `Outlet`.

use std::fmt;
use std::rc::Rc;

use dioxus::prelude::*;
use store::config::AuthConfig;
use store::{read_token, KeyValueStorage};

use crate::stores::{use_client_config, use_storage};

/// Where an unauthenticated visitor is sent, and what they are told.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginRedirect {
    pub path: String,
    pub message: String,
}

impl LoginRedirect {
    pub fn from_config(auth: &AuthConfig) -> Self {
        Self {
            path: auth.login_path.clone(),
            message: auth.login_message.clone(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// `"/auth/login?message=Please%20log%20in%20..."`
    pub fn href(&self) -> String {
        format!("{}?message={}", self.path, urlencoding::encode(&self.message))
    }
}

impl Default for LoginRedirect {
    fn default() -> Self {
        Self::from_config(&AuthConfig::default())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    Granted,
    Denied(LoginRedirect),
}

/// Decide whether the visitor may see a protected view.
pub fn check_access(storage: &dyn KeyValueStorage, redirect: &LoginRedirect) -> Access {
    match read_token(storage) {
        Some(_) => Access::Granted,
        None => Access::Denied(redirect.clone()),
    }
}

/// Navigation capability handed to the gates through context.
///
/// The app provides one from inside its router; tests provide one that
/// records where it was asked to go.
#[derive(Clone)]
pub struct Redirector(Rc<dyn Fn(LoginRedirect)>);

impl Redirector {
    pub fn new(navigate: impl Fn(LoginRedirect) + 'static) -> Self {
        Self(Rc::new(navigate))
    }

    pub fn redirect(&self, to: LoginRedirect) {
        (self.0)(to)
    }
}

impl PartialEq for Redirector {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Redirector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Redirector")
    }
}

pub fn use_redirector() -> Redirector {
    use_context::<Redirector>()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    Checking,
    Authenticated,
}

/// The single check a gate performs on mount.
///
/// On denial this navigates away and the gate stays in [`GateState::Checking`].
pub fn run_gate_check(
    storage: &dyn KeyValueStorage,
    redirect: &LoginRedirect,
    redirector: &Redirector,
) -> GateState {
    match check_access(storage, redirect) {
        Access::Granted => GateState::Authenticated,
        Access::Denied(to) => {
            tracing::info!("No auth token, redirecting to {}", to.href());
            redirector.redirect(to);
            GateState::Checking
        }
    }
}

/// Runs [`run_gate_check`] once after the first render and reports the outcome.
fn use_gate_check() -> Signal<GateState> {
    let storage = use_storage();
    let config = use_client_config();
    let redirector = use_redirector();
    let mut state = use_signal(|| GateState::Checking);

    use_effect(move || {
        let redirect = LoginRedirect::from_config(&config.auth);
        if run_gate_check(storage.as_ref(), &redirect, &redirector) == GateState::Authenticated {
            state.set(GateState::Authenticated);
        }
    });

    state
}

/// Gate that shows a loading screen until the token check passes.
#[component]
pub fn AuthGate(children: Element) -> Element {
    let state = use_gate_check();

    match state() {
        GateState::Checking => rsx! {
            LoadingScreen {}
        },
        GateState::Authenticated => rsx! {
            {children}
        },
    }
}

/// Gate that renders nothing until the token check passes.
#[component]
pub fn SimpleAuthGate(children: Element) -> Element {
    let state = use_gate_check();

    if state() == GateState::Authenticated {
        rsx! {
            {children}
        }
    } else {
        rsx! {}
    }
}

#[component]
pub fn LoadingScreen(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "loading-screen",
            style: "display: flex; align-items: center; justify-content: center; min-height: 400px;",
            div {
                style: "text-align: center;",
                div { class: "loading-spinner" }
                p {
                    style: "margin-top: 1rem; font-size: 1.125rem;",
                    "{label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::sync::Arc;

    use store::{ClientConfig, MemoryStorage, SharedStorage, AUTH_TOKEN_KEY};

    use super::*;
    use crate::stores::use_provide_stores;

    fn recording_redirector() -> (Redirector, Rc<RefCell<Vec<LoginRedirect>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let redirector = Redirector::new(move |to| sink.borrow_mut().push(to));
        (redirector, seen)
    }

    #[test]
    fn test_missing_token_redirects_with_message() {
        let storage = MemoryStorage::new();
        let (redirector, seen) = recording_redirector();

        let state = run_gate_check(&storage, &LoginRedirect::default(), &redirector);

        assert_eq!(state, GateState::Checking);
        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].path, "/auth/login");
        assert_eq!(seen[0].message, "Please log in to access this page");
        assert!(seen[0].href().starts_with("/auth/login?message="));
    }

    #[test]
    fn test_present_token_authenticates_without_navigation() {
        let storage = MemoryStorage::with_items([(AUTH_TOKEN_KEY, "abc123")]);
        let (redirector, seen) = recording_redirector();

        let state = run_gate_check(&storage, &LoginRedirect::default(), &redirector);

        assert_eq!(state, GateState::Authenticated);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_token_is_not_validated() {
        let storage = MemoryStorage::with_items([(AUTH_TOKEN_KEY, "definitely-expired")]);
        assert_eq!(
            check_access(&storage, &LoginRedirect::default()),
            Access::Granted
        );
    }

    #[test]
    fn test_href_encodes_message() {
        let redirect = LoginRedirect::default();
        assert_eq!(
            redirect.href(),
            "/auth/login?message=Please%20log%20in%20to%20access%20this%20page"
        );
        assert_eq!(
            redirect.with_message("bye").href(),
            "/auth/login?message=bye"
        );
    }

    #[component]
    fn Secret(label: String) -> Element {
        rsx! {
            p { "secret: {label}" }
        }
    }

    fn provide_test_context(token: Option<&'static str>) {
        use_provide_stores(move || {
            let storage: SharedStorage = match token {
                Some(t) => Arc::new(MemoryStorage::with_items([(AUTH_TOKEN_KEY, t)])),
                None => Arc::new(MemoryStorage::new()),
            };
            (ClientConfig::default(), storage)
        });
        use_context_provider(|| Redirector::new(|_| {}));
    }

    #[component]
    fn LoadingGateHarness() -> Element {
        provide_test_context(Some("abc123"));
        rsx! {
            AuthGate {
                Secret { label: "quarterly numbers" }
            }
        }
    }

    #[component]
    fn SimpleGateHarness() -> Element {
        provide_test_context(None);
        rsx! {
            SimpleAuthGate {
                Secret { label: "quarterly numbers" }
            }
        }
    }

    #[test]
    fn test_loading_gate_first_render_shows_placeholder() {
        let mut dom = VirtualDom::new(LoadingGateHarness);
        dom.rebuild_in_place();
        let html = dioxus::ssr::render(&dom);

        assert!(html.contains("Loading..."));
        assert!(!html.contains("secret"));
    }

    #[test]
    fn test_simple_gate_first_render_is_empty() {
        let mut dom = VirtualDom::new(SimpleGateHarness);
        dom.rebuild_in_place();
        let html = dioxus::ssr::render(&dom);

        assert!(!html.contains("secret"));
        assert!(!html.contains("Loading"));
    }

    #[derive(Props, Clone, PartialEq)]
    struct RecordingHarnessProps {
        token: Option<&'static str>,
        simple: bool,
        redirector: Redirector,
    }

    #[allow(non_snake_case)]
    fn RecordingHarness(props: RecordingHarnessProps) -> Element {
        let token = props.token;
        use_provide_stores(move || {
            let storage: SharedStorage = match token {
                Some(t) => Arc::new(MemoryStorage::with_items([(AUTH_TOKEN_KEY, t)])),
                None => Arc::new(MemoryStorage::new()),
            };
            (ClientConfig::default(), storage)
        });
        use_context_provider(|| props.redirector.clone());

        if props.simple {
            rsx! {
                SimpleAuthGate {
                    Secret { label: "q" }
                }
            }
        } else {
            rsx! {
                AuthGate {
                    Secret { label: "q" }
                }
            }
        }
    }

    /// Mount the harness, let the gate's effect run, and return the settled HTML.
    async fn settle(token: Option<&'static str>, simple: bool) -> (String, Vec<LoginRedirect>) {
        let (redirector, seen) = recording_redirector();
        let mut dom = VirtualDom::new_with_props(
            RecordingHarness,
            RecordingHarnessProps {
                token,
                simple,
                redirector,
            },
        );
        dom.rebuild_in_place();
        for _ in 0..3 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(100),
                dom.wait_for_work(),
            )
            .await;
            dom.render_immediate_to_vec();
        }
        let html = dioxus::ssr::render(&dom);
        let seen = seen.borrow().clone();
        (html, seen)
    }

    #[tokio::test]
    async fn test_loading_gate_renders_children_with_token() {
        let (html, seen) = settle(Some("abc123"), false).await;

        assert!(html.contains("secret: q"), "{html}");
        assert!(!html.contains("Loading..."));
        assert!(seen.is_empty());
    }

    #[tokio::test]
    async fn test_simple_gate_renders_children_with_token() {
        let (html, seen) = settle(Some("abc123"), true).await;

        assert!(html.contains("secret: q"), "{html}");
        assert!(seen.is_empty());
    }

    #[tokio::test]
    async fn test_loading_gate_redirects_without_token() {
        let (html, seen) = settle(None, false).await;

        assert!(html.contains("Loading..."), "{html}");
        assert!(!html.contains("secret"));
        assert_eq!(seen.len(), 1);
        assert_eq!(
            seen[0].href(),
            "/auth/login?message=Please%20log%20in%20to%20access%20this%20page"
        );
    }

    #[tokio::test]
    async fn test_simple_gate_redirects_without_token() {
        let (html, seen) = settle(None, true).await;

        assert!(!html.contains("secret"));
        assert!(!html.contains("Loading"));
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].message, "Please log in to access this page");
    }
}
