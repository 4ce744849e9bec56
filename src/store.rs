// src/store.rs
//
// Persistence for the saved collection.
//
// The whole collection lives as ONE JSON blob under ONE key of a key-value
// backend. Every mutation rewrites the blob; there are no partial writes.
// Loading never fails: a missing blob is an empty collection, an unreadable
// or unparseable blob is logged, removed, and also an empty collection.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::collection::SavedCollection;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("cannot encode saved collection: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("invalid store key: {0:?}")]
    BadKey(String),
}

/// String key-value backend (browser-storage shaped).
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_item(&mut self, key: &str) -> Result<(), StoreError>;
}

/* ---------------- Backends ---------------- */

/// Process-local backend; used by tests and one-shot runs.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items.insert(s!(key), s!(value));
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError> {
        self.items.remove(key);
        Ok(())
    }
}

/// One file per key inside `dir` (`<dir>/<key>.json`).
/// Writes go to a sibling temp file first and are renamed into place.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let ok = !key.is_empty()
            && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !ok {
            return Err(StoreError::BadKey(s!(key)));
        }
        Ok(self.dir.join(join!(key, ".json")))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/* ---------------- Saved collection blob ---------------- */

/// The saved collection bound to one storage key.
#[derive(Debug)]
pub struct SavedStore<S: KeyValueStore> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> SavedStore<S> {
    pub fn new(backend: S, key: &str) -> Self {
        Self { backend, key: s!(key) }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Read the collection. Never fails; corrupt state is dropped.
    pub fn load(&mut self) -> SavedCollection {
        let text = match self.backend.get_item(&self.key) {
            Ok(Some(text)) => text,
            Ok(None) => {
                logd!("Store: no saved searches under {:?}", self.key);
                return SavedCollection::new();
            }
            Err(e) => {
                loge!("Store: read failed for {:?}: {e}", self.key);
                return SavedCollection::new();
            }
        };

        match serde_json::from_str::<SavedCollection>(&text) {
            Ok(saved) => {
                logf!("Store: loaded {} saved searches", saved.len());
                saved
            }
            Err(e) => {
                loge!("Store: saved searches unreadable, resetting: {e}");
                if let Err(e) = self.backend.remove_item(&self.key) {
                    loge!("Store: could not clear {:?}: {e}", self.key);
                }
                SavedCollection::new()
            }
        }
    }

    /// Overwrite the blob with the whole collection.
    pub fn save(&mut self, saved: &SavedCollection) -> Result<(), StoreError> {
        let text = serde_json::to_string(saved)?;
        self.backend.set_item(&self.key, &text)?;
        logd!("Store: wrote {} saved searches ({} bytes)", saved.len(), text.len());
        Ok(())
    }

    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.backend.remove_item(&self.key)
    }
}
