use dioxus::prelude::*;
use store::{Document, TagSet};
use ui::{use_api, use_project_store, use_session_guard};

/// One project with its documents and tag sets.
#[component]
pub fn ProjectDetail(id: String) -> Element {
    let api = use_api();
    let mut projects = use_project_store();
    let session = use_session_guard();

    let _loader = use_resource(use_reactive!(|id| {
        let api = api.clone();
        let session = session.clone();
        async move {
            projects.write().set_loading(true);
            let loaded = api.get_project(&id).await;
            projects.write().set_loading(false);
            match loaded {
                Ok(project) => projects.write().set_current_project(Some(project)),
                Err(e) if session.check(&e) => return,
                Err(e) => {
                    tracing::warn!("Failed to load project {}: {}", id, e);
                    projects.write().set_error(Some(e.to_string()));
                }
            }

            projects.write().set_documents_loading(true);
            let documents = api.list_project_documents(&id).await;
            projects.write().set_documents_loading(false);
            match documents {
                Ok(payload) => projects
                    .write()
                    .set_documents(api::decode_list::<Document>(&payload, "documents")),
                Err(e) if session.check(&e) => return,
                Err(e) => tracing::warn!("Failed to load documents: {}", e),
            }

            projects.write().set_tag_sets_loading(true);
            let tag_sets = api.list_project_tagsets(&id).await;
            projects.write().set_tag_sets_loading(false);
            match tag_sets {
                Ok(payload) => projects
                    .write()
                    .set_tag_sets(api::decode_list::<TagSet>(&payload, "tagsets")),
                Err(e) if session.check(&e) => {}
                Err(e) => tracing::warn!("Failed to load tag sets: {}", e),
            }
        }
    }));

    let store = projects.read();

    rsx! {
        div {
            class: "project-detail",

            if let Some(ref error) = store.error {
                p { class: "error", "{error}" }
            }

            match store.current_project.as_ref() {
                Some(project) => rsx! {
                    h1 { "{project.name}" }
                    p { class: "description", "{project.description}" }
                },
                None if store.is_loading => rsx! { p { "Loading project..." } },
                None => rsx! { p { "Project not found." } },
            }

            section {
                h2 { "Documents" }
                if store.is_documents_loading {
                    p { "Loading documents..." }
                } else {
                    ul {
                        for doc in store.documents.iter() {
                            li { key: "{doc.id}", "{doc.name}" }
                        }
                    }
                }
            }

            section {
                h2 { "Tag sets" }
                if store.is_tag_sets_loading {
                    p { "Loading tag sets..." }
                } else {
                    ul {
                        for tag_set in store.tag_sets.iter() {
                            li {
                                key: "{tag_set.id}",
                                "{tag_set.name} ({tag_set.tags.len()} tags)"
                            }
                        }
                    }
                }
            }
        }
    }
}
