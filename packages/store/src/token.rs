//! Auth token access.
//!
//! The token is an opaque string kept in client-persistent storage under
//! [`AUTH_TOKEN_KEY`]. Its presence is what gates protected views; nothing
//! on the client checks validity or expiry.

use crate::storage::{KeyValueStorage, StorageError};

/// Storage key holding the bearer token.
pub const AUTH_TOKEN_KEY: &str = "auth-token";

/// Read the stored token. An empty value counts as absent.
pub fn read_token(storage: &dyn KeyValueStorage) -> Option<String> {
    storage
        .get_item(AUTH_TOKEN_KEY)
        .filter(|token| !token.is_empty())
}

pub fn store_token(storage: &dyn KeyValueStorage, token: &str) -> Result<(), StorageError> {
    storage.set_item(AUTH_TOKEN_KEY, token)
}

pub fn clear_token(storage: &dyn KeyValueStorage) -> Result<(), StorageError> {
    storage.remove_item(AUTH_TOKEN_KEY)
}
