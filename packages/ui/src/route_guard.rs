//! Route interception for protected path prefixes.
//!
//! Every navigation passes through [`intercept`]. Enforcement is currently
//! switched off: the interceptor recognises the protected prefixes but always
//! lets the navigation continue, and the per-view [`crate::AuthGate`]s do the
//! actual gating.

/// Path prefixes the interceptor watches.
pub const PROTECTED_PREFIXES: [&str; 4] = ["/dashboard", "/projects", "/admin", "/settings"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Interception {
    Continue,
    /// Send the visitor elsewhere instead. Unused while enforcement is off.
    Redirect(String),
}

/// Whether `path` is one of the protected prefixes or lies beneath one.
pub fn is_protected(path: &str) -> bool {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    PROTECTED_PREFIXES.iter().any(|prefix| {
        path == *prefix
            || path
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('/'))
    })
}

/// Decide what happens to a navigation to `path`.
pub fn intercept(path: &str) -> Interception {
    if is_protected(path) {
        tracing::debug!("Route {} is protected; enforcement disabled", path);
        // Extension point: enforce protected prefixes here (session check or
        // token check) once the backend integration is settled.
    }
    Interception::Continue
}
