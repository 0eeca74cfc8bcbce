use dioxus::prelude::*;
use ui::{use_api, use_project_store, use_session_guard};

use crate::Route;

/// The visitor's projects.
#[component]
pub fn Dashboard() -> Element {
    let api = use_api();
    let mut projects = use_project_store();
    let nav = use_navigator();
    let session = use_session_guard();

    let _loader = use_resource(move || {
        let api = api.clone();
        let session = session.clone();
        async move {
            projects.write().set_loading(true);
            match api.list_projects().await {
                Ok(list) => {
                    let mut store = projects.write();
                    store.set_projects(list);
                    store.set_error(None);
                }
                Err(e) if session.check(&e) => {}
                Err(e) => {
                    tracing::warn!("Failed to load projects: {}", e);
                    projects.write().set_error(Some(e.to_string()));
                }
            }
            projects.write().set_loading(false);
        }
    });

    let store = projects.read();

    rsx! {
        div {
            class: "dashboard",
            h1 { "Projects" }

            if let Some(ref error) = store.error {
                p { class: "error", "{error}" }
            }

            if store.is_loading {
                p { "Loading projects..." }
            } else if store.projects.is_empty() {
                p { class: "placeholder", "No projects yet." }
            } else {
                ul {
                    class: "project-list",
                    for project in store.projects.iter() {
                        li {
                            key: "{project.id}",
                            onclick: {
                                let id = project.id.clone();
                                move |_| {
                                    nav.push(Route::ProjectDetail { id: id.clone() });
                                }
                            },
                            strong { "{project.name}" }
                            if !project.description.is_empty() {
                                span { class: "description", " {project.description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
