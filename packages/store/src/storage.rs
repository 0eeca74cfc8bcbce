//! # Client-persistent key/value storage
//!
//! The browser's `localStorage` is the model: string keys, string values,
//! scoped to the application and surviving restarts. [`KeyValueStorage`] is
//! the seam every persisted piece of client state goes through, so the same
//! stores run against the browser ([`crate::LocalStorage`]), a directory on
//! disk ([`crate::FileStorage`]) or plain memory ([`crate::MemoryStorage`]).
//!
//! Reads are infallible from the caller's point of view: an unavailable or
//! unreadable backend looks like a missing key. Writes report failures so the
//! caller can decide whether to log or surface them.

use std::sync::Arc;

use thiserror::Error;

/// Errors raised when writing to a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode stored value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Synchronous string key/value storage.
pub trait KeyValueStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Shared handle to a storage backend.
pub type SharedStorage = Arc<dyn KeyValueStorage>;

/// Platform-appropriate storage for the running client.
///
/// - **Web** (WASM + `web` feature): `window.localStorage`
/// - **Native**: one file per key under `<data_dir>/tagdesk/`
pub fn platform_storage() -> SharedStorage {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Arc::new(crate::LocalStorage::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("tagdesk");
        Arc::new(crate::FileStorage::new(base))
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        Arc::new(crate::MemoryStorage::new())
    }
}
