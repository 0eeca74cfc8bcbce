use dioxus::prelude::*;

use ui::{
    intercept, AuthGate, Interception, LoginRedirect, Navbar, Redirector, SimpleAuthGate,
    StoreProvider,
};
use views::{Dashboard, Login, ProjectDetail, Register, Settings, Tagsets};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Root {},
        #[route("/auth/login?:message")]
        Login { message: String },
        #[route("/auth/register")]
        Register {},
        #[layout(Protected)]
            #[route("/dashboard")]
            Dashboard {},
            #[route("/projects/:id")]
            ProjectDetail { id: String },
            #[route("/settings")]
            Settings {},
        #[end_layout]
        #[layout(SimpleProtected)]
            #[route("/tagsets")]
            Tagsets {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        StoreProvider {
            Router::<Route> {}
        }
    }
}

/// Layout around every page: provides navigation to the gates and runs the
/// route interceptor.
#[component]
fn AppShell() -> Element {
    let nav = use_navigator();
    use_context_provider(|| {
        Redirector::new(move |to: LoginRedirect| {
            nav.replace(Route::Login {
                message: to.message,
            });
        })
    });

    let route = use_route::<Route>();
    if let Interception::Redirect(to) = intercept(&route.to_string()) {
        let target: NavigationTarget = NavigationTarget::External(to);
        nav.replace(target);
    }

    rsx! {
        Navbar {
            Link { to: Route::Dashboard {}, "Projects" }
            Link { to: Route::Tagsets {}, "Tag sets" }
            Link { to: Route::Settings {}, "Settings" }
        }
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}

#[component]
fn Protected() -> Element {
    rsx! {
        AuthGate {
            Outlet::<Route> {}
        }
    }
}

#[component]
fn SimpleProtected() -> Element {
    rsx! {
        SimpleAuthGate {
            Outlet::<Route> {}
        }
    }
}

/// Redirect `/` to `/dashboard`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}
