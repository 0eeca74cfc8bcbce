//! Client-side state for the tagging workspace: domain models, persistent
//! key/value storage, the auth token, and the user and project stores.

pub mod config;
pub mod models;
pub mod project_store;
pub mod storage;
pub mod token;
pub mod user_store;

mod memory;
pub use memory::MemoryStorage;

mod file_store;
pub use file_store::FileStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use config::{ClientConfig, ConfigError};
pub use models::{
    Document, DocumentPatch, Project, ProjectPatch, TagDefinition, TagSet, TagSetPatch, User,
    UserPatch,
};
pub use project_store::ProjectStore;
pub use storage::{platform_storage, KeyValueStorage, SharedStorage, StorageError};
pub use token::{clear_token, read_token, store_token, AUTH_TOKEN_KEY};
pub use user_store::{UserState, UserStore, USER_STORAGE_KEY};
