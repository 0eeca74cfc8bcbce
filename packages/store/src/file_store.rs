//! # Filesystem-backed storage
//!
//! [`FileStorage`] is the [`KeyValueStorage`] used on native platforms, where
//! there is no `localStorage`. Every key becomes one file under the base
//! directory, so state written by one run is visible to the next.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── auth-token          # raw token string
//! └── user-storage        # persisted user snapshot (JSON)
//! ```
//!
//! Keys are sanitised to `[A-Za-z0-9._-]`; anything else is replaced by `_`.

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::storage::{KeyValueStorage, StorageError};

/// Filesystem-backed storage for native builds.
#[derive(Clone, Debug)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn item_path(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base.join(file_name)
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.item_path(key)).ok()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.item_path(key), value)?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.item_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
