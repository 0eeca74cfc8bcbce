use dioxus::prelude::*;
use store::TagSet;
use ui::{use_api, use_project_store, use_session_guard};

/// Every tag set the signed-in user owns.
#[component]
pub fn Tagsets() -> Element {
    let api = use_api();
    let mut projects = use_project_store();
    let session = use_session_guard();

    let _loader = use_resource({
        let api = api.clone();
        let session = session.clone();
        move || {
            let api = api.clone();
            let session = session.clone();
            async move {
                projects.write().set_tag_sets_loading(true);
                let listed = api.list_tagsets().await;
                projects.write().set_tag_sets_loading(false);
                match listed {
                    Ok(payload) => {
                        let mut store = projects.write();
                        store.set_tag_sets(api::decode_list::<TagSet>(&payload, "tagsets"));
                        store.set_error(None);
                    }
                    Err(e) if session.check(&e) => {}
                    Err(e) => {
                        tracing::warn!("Failed to load tag sets: {}", e);
                        projects.write().set_error(Some(e.to_string()));
                    }
                }
            }
        }
    });

    let on_delete = move |id: String| {
        let api = api.clone();
        let session = session.clone();
        spawn(async move {
            let Ok(numeric) = id.parse::<i64>() else {
                tracing::warn!("Tag set id {} is not numeric, cannot delete", id);
                return;
            };
            match api.delete_tagset(numeric).await {
                Ok(_) => projects.write().remove_tag_set(&id),
                Err(e) if session.check(&e) => {}
                Err(e) => {
                    tracing::warn!("Failed to delete tag set {}: {}", id, e);
                    projects.write().set_error(Some(e.to_string()));
                }
            }
        });
    };

    let store = projects.read();

    rsx! {
        div {
            class: "tagsets",
            h1 { "Tag sets" }

            if let Some(ref message) = store.error {
                p { class: "error", "{message}" }
            }

            if store.is_tag_sets_loading {
                p { "Loading tag sets..." }
            } else if store.tag_sets.is_empty() {
                p { class: "placeholder", "No tag sets yet." }
            } else {
                ul {
                    for tag_set in store.tag_sets.iter() {
                        li {
                            key: "{tag_set.id}",
                            strong { "{tag_set.name}" }
                            span { class: "description", " {tag_set.description}" }
                            span { class: "tag-count", " ({tag_set.tags.len()} tags)" }
                            button {
                                class: "secondary",
                                onclick: {
                                    let on_delete = on_delete.clone();
                                    let id = tag_set.id.clone();
                                    move |_| on_delete(id.clone())
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}
