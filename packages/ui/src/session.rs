//! Session expiry handling for view-level API calls.
//!
//! The API client already drops the stored token when the server answers
//! 401. Views pass every error through [`SessionGuard::check`] so the visitor
//! also lands on the login page instead of staring at an error message.

use api::ApiError;
use dioxus::prelude::*;

use crate::auth_gate::{use_redirector, LoginRedirect, Redirector};
use crate::stores::use_client_config;

/// Shown on the login page after a 401.
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired, please log in again";

/// Redirect to login when `error` is a 401. Returns whether it did.
pub fn redirect_if_unauthorized(
    error: &ApiError,
    redirect: &LoginRedirect,
    redirector: &Redirector,
) -> bool {
    if !error.is_unauthorized() {
        return false;
    }
    tracing::info!("Session rejected by the server, redirecting to {}", redirect.href());
    redirector.redirect(redirect.clone());
    true
}

/// Bundles the redirect target and navigation for [`redirect_if_unauthorized`].
#[derive(Clone, Debug, PartialEq)]
pub struct SessionGuard {
    redirect: LoginRedirect,
    redirector: Redirector,
}

impl SessionGuard {
    pub fn new(redirect: LoginRedirect, redirector: Redirector) -> Self {
        Self {
            redirect,
            redirector,
        }
    }

    /// `true` when the error was a 401 and the visitor is being sent to login.
    pub fn check(&self, error: &ApiError) -> bool {
        redirect_if_unauthorized(error, &self.redirect, &self.redirector)
    }
}

pub fn use_session_guard() -> SessionGuard {
    let config = use_client_config();
    let redirector = use_redirector();
    SessionGuard::new(
        LoginRedirect::from_config(&config.auth).with_message(SESSION_EXPIRED_MESSAGE),
        redirector,
    )
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn recording_guard() -> (SessionGuard, Rc<RefCell<Vec<LoginRedirect>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let guard = SessionGuard::new(
            LoginRedirect::default().with_message(SESSION_EXPIRED_MESSAGE),
            Redirector::new(move |to| sink.borrow_mut().push(to)),
        );
        (guard, seen)
    }

    #[test]
    fn test_unauthorized_redirects_to_login() {
        let (guard, seen) = recording_guard();
        let err = ApiError::from_status(401, r#"{"detail":"Could not validate credentials"}"#);

        assert!(guard.check(&err));
        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].path, "/auth/login");
        assert_eq!(seen[0].message, SESSION_EXPIRED_MESSAGE);
    }

    #[test]
    fn test_other_errors_do_not_navigate() {
        let (guard, seen) = recording_guard();

        assert!(!guard.check(&ApiError::from_status(403, r#"{"detail":"Forbidden"}"#)));
        assert!(!guard.check(&ApiError::from_status(500, "")));
        assert!(!guard.check(&ApiError::Transport("connection refused".into())));
        assert!(seen.borrow().is_empty());
    }
}
