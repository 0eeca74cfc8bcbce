//! This crate contains all shared UI for the workspace.

mod stores;
pub use stores::{
    use_api, use_client_config, use_project_store, use_provide_stores, use_storage,
    use_user_store, StoreProvider,
};

pub mod auth_gate;
pub use auth_gate::{
    check_access, run_gate_check, use_redirector, Access, AuthGate, GateState, LoadingScreen,
    LoginRedirect, Redirector, SimpleAuthGate,
};

pub mod route_guard;
pub use route_guard::{intercept, is_protected, Interception, PROTECTED_PREFIXES};

mod session;
pub use session::{
    redirect_if_unauthorized, use_session_guard, SessionGuard, SESSION_EXPIRED_MESSAGE,
};

mod logout;
pub use logout::LogoutButton;

mod navbar;
pub use navbar::{first_name, initials, Navbar};
