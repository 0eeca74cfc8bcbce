//! Store instances and the hooks that reach them.
//!
//! Each app (or test) owns its own storage handle, config, API client and
//! stores; nothing is a process-wide global. [`StoreProvider`] builds the
//! platform defaults. Tests call [`use_provide_stores`] from their own root
//! component with in-memory storage instead.

use api::HttpClient;
use dioxus::prelude::*;
use store::{platform_storage, ClientConfig, ProjectStore, SharedStorage, UserStore};

/// Provide config, storage, API client and both stores to every descendant.
///
/// `init` runs once per mount.
pub fn use_provide_stores(init: impl FnOnce() -> (ClientConfig, SharedStorage)) {
    let (config, storage) = use_hook(init);

    use_context_provider(|| config.clone());
    use_context_provider(|| storage.clone());
    use_context_provider(|| api::http_client(&config, storage.clone()));
    use_context_provider(|| Signal::new(UserStore::load(storage.clone())));
    use_context_provider(|| Signal::new(ProjectStore::new()));
}

/// Root provider using the platform storage and the startup config.
/// Wrap your app with this component.
#[component]
pub fn StoreProvider(children: Element) -> Element {
    use_provide_stores(|| (ClientConfig::load(), platform_storage()));

    rsx! {
        {children}
    }
}

pub fn use_client_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// Client-persistent storage (token, persisted user).
pub fn use_storage() -> SharedStorage {
    use_context::<SharedStorage>()
}

pub fn use_api() -> HttpClient {
    use_context::<HttpClient>()
}

/// The current user. Mutations are persisted by the store itself.
pub fn use_user_store() -> Signal<UserStore> {
    use_context::<Signal<UserStore>>()
}

/// The session's projects, documents and tag sets.
pub fn use_project_store() -> Signal<ProjectStore> {
    use_context::<Signal<ProjectStore>>()
}
