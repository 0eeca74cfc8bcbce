//! # User state store
//!
//! [`UserStore`] holds the signed-in [`User`] plus the transient loading and
//! error flags the views toggle around their own requests. It is a plain
//! value: the UI keeps one instance inside a signal, tests build their own.
//!
//! ## Persistence
//!
//! Only the `user` field survives restarts. After every mutating operation the
//! store writes a snapshot under [`USER_STORAGE_KEY`]:
//!
//! ```json
//! { "state": { "user": { ... } }, "version": 0 }
//! ```
//!
//! [`UserStore::load`] reads that snapshot back. A missing entry, or one that
//! no longer parses, yields the initial state. Write failures are logged and
//! never undo the in-memory transition.

use serde::{Deserialize, Serialize};

use crate::models::{User, UserPatch};
use crate::storage::{SharedStorage, StorageError};

/// Storage key for the persisted user snapshot.
pub const USER_STORAGE_KEY: &str = "user-storage";

const SNAPSHOT_VERSION: u32 = 0;

/// The observable state of the store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserState {
    pub user: Option<User>,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct PersistedUser {
    user: Option<User>,
}

#[derive(Serialize, Deserialize)]
struct Snapshot {
    state: PersistedUser,
    #[serde(default)]
    version: u32,
}

#[derive(Clone, Default)]
pub struct UserStore {
    state: UserState,
    storage: Option<SharedStorage>,
}

impl std::fmt::Debug for UserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserStore")
            .field("state", &self.state)
            .field("persisted", &self.storage.is_some())
            .finish()
    }
}

impl PartialEq for UserStore {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl UserStore {
    /// A store that never touches durable storage.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Rehydrate from `storage` and persist every later mutation back to it.
    pub fn load(storage: SharedStorage) -> Self {
        let user = match storage.get_item(USER_STORAGE_KEY) {
            Some(raw) => match serde_json::from_str::<Snapshot>(&raw) {
                Ok(snapshot) => snapshot.state.user,
                Err(e) => {
                    tracing::warn!("Discarding unreadable user snapshot: {}", e);
                    None
                }
            },
            None => None,
        };

        Self {
            state: UserState {
                user,
                ..UserState::default()
            },
            storage: Some(storage),
        }
    }

    pub fn state(&self) -> &UserState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    /// Replace the user wholesale. Also clears any error.
    pub fn set_user(&mut self, user: Option<User>) {
        self.state.user = user;
        self.state.error = None;
        self.save();
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.state.is_loading = is_loading;
        self.save();
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.state.error = error;
        self.save();
    }

    /// Forget the user (logout).
    pub fn clear_user(&mut self) {
        self.state.user = None;
        self.state.error = None;
        self.save();
    }

    /// Shallow-merge `patch` into the current user. No-op without a user.
    pub fn update_user(&mut self, patch: UserPatch) {
        let Some(user) = self.state.user.as_mut() else {
            return;
        };
        patch.apply_to(user);
        self.save();
    }

    fn save(&self) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(e) = self.write_snapshot(storage) {
            tracing::warn!("Failed to persist user state: {}", e);
        }
    }

    fn write_snapshot(&self, storage: &SharedStorage) -> Result<(), StorageError> {
        let snapshot = Snapshot {
            state: PersistedUser {
                user: self.state.user.clone(),
            },
            version: SNAPSHOT_VERSION,
        };
        let raw = serde_json::to_string(&snapshot)?;
        storage.set_item(USER_STORAGE_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::KeyValueStorage;
    use crate::MemoryStorage;

    fn ada() -> User {
        User {
            id: "u1".into(),
            email: "ada@example.com".into(),
            name: "Ada".into(),
            avatar_url: None,
            is_active: true,
            is_admin: false,
            email_verified: true,
            created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
            updated_at: "2024-01-02T00:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_set_then_clear_user() {
        let mut store = UserStore::in_memory();
        store.set_error(Some("boom".into()));
        store.set_user(Some(ada()));
        assert_eq!(store.user(), Some(&ada()));
        assert_eq!(store.error(), None);

        store.set_error(Some("later".into()));
        store.clear_user();
        assert_eq!(store.user(), None);
        assert_eq!(store.error(), None);
    }

    #[test]
    fn test_update_user_merges() {
        let mut store = UserStore::in_memory();
        store.set_user(Some(ada()));

        store.update_user(UserPatch {
            name: Some("Ada Lovelace".into()),
            avatar_url: Some(Some("https://cdn.example.com/ada.png".into())),
            ..UserPatch::default()
        });

        let expected = User {
            name: "Ada Lovelace".into(),
            avatar_url: Some("https://cdn.example.com/ada.png".into()),
            ..ada()
        };
        assert_eq!(store.user(), Some(&expected));
    }

    #[test]
    fn test_update_without_user_is_noop() {
        let mut store = UserStore::in_memory();
        store.update_user(UserPatch {
            name: Some("ghost".into()),
            ..UserPatch::default()
        });
        assert_eq!(store.state(), &UserState::default());
    }

    #[test]
    fn test_user_survives_reload() {
        let storage = Arc::new(MemoryStorage::new());

        let mut store = UserStore::load(storage.clone());
        store.set_user(Some(ada()));
        store.set_loading(true);
        store.set_error(Some("transient".into()));

        let reloaded = UserStore::load(storage.clone());
        assert_eq!(reloaded.user(), Some(&ada()));
        assert!(!reloaded.is_loading());
        assert_eq!(reloaded.error(), None);
    }

    #[test]
    fn test_snapshot_only_contains_user() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = UserStore::load(storage.clone());
        store.set_user(Some(ada()));
        store.set_loading(true);

        let raw = storage.get_item(USER_STORAGE_KEY).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let state = value["state"].as_object().unwrap();
        assert_eq!(state.len(), 1);
        assert_eq!(state["user"]["email"], "ada@example.com");
        assert_eq!(value["version"], 0);
    }

    #[test]
    fn test_clear_user_persists_null() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = UserStore::load(storage.clone());
        store.set_user(Some(ada()));
        store.clear_user();

        assert_eq!(UserStore::load(storage).user(), None);
    }

    #[test]
    fn test_garbage_snapshot_yields_initial_state() {
        let storage = Arc::new(MemoryStorage::with_items([(USER_STORAGE_KEY, "{not json")]));
        let store = UserStore::load(storage);
        assert_eq!(store.state(), &UserState::default());
    }
}
