//! Key-value slot backend.
//!
//! Mirrors a browser's small synchronous string store: every value is a
//! string under a string key. The session blob lives under
//! [`SAVED_KEY`] and the display name under [`NAME_KEY`].

use crate::storage::AtomicFile;
use async_trait::async_trait;
use nostalgia_core::StoreError;
use nostalgia_core::session::{RecordBlob, SessionRecordStore, StoredRecord};
use nostalgia_core::user::{NAME_KEY, ProfileRepository};
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{debug, info};

/// Key under which the session blob is kept.
pub const SAVED_KEY: &str = "nostalgiaTokSaved";

/// A synchronous string-to-string store.
pub trait KeyValueSlot: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Slot persisted as a JSON object in one file.
pub struct FileSlot {
    file: AtomicFile,
}

impl FileSlot {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicFile::new(path),
        }
    }

    fn parse(content: Option<String>) -> Result<BTreeMap<String, String>, StoreError> {
        match content {
            Some(text) if !text.trim().is_empty() => serde_json::from_str(&text)
                .map_err(|e| StoreError::unavailable(format!("slot file unreadable: {}", e))),
            _ => Ok(BTreeMap::new()),
        }
    }
}

impl KeyValueSlot for FileSlot {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = Self::parse(self.file.read()?)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.file.update(|content| {
            let mut entries = Self::parse(content)?;
            entries.insert(key.to_string(), value.to_string());
            serde_json::to_string_pretty(&entries)
                .map_err(|e| StoreError::unavailable(format!("slot encode failed: {}", e)))
        })
    }
}

/// In-process slot. Nothing survives the process.
#[derive(Default)]
pub struct MemorySlot {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueSlot for MemorySlot {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::unavailable("memory slot poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::unavailable("memory slot poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Session record store and profile repository over a key-value slot.
pub struct KeyValueSessionStore<S: KeyValueSlot> {
    slot: S,
    /// Serializes read-modify-write cycles on the session blob.
    write_lock: Mutex<()>,
}

impl<S: KeyValueSlot> KeyValueSessionStore<S> {
    pub fn new(slot: S) -> Self {
        Self {
            slot,
            write_lock: Mutex::new(()),
        }
    }

    fn read_blob(&self) -> Result<String, StoreError> {
        Ok(self.slot.get(SAVED_KEY)?.unwrap_or_default())
    }
}

impl KeyValueSessionStore<FileSlot> {
    /// Opens a file-backed slot at `path`.
    pub fn open(path: PathBuf) -> Self {
        Self::new(FileSlot::new(path))
    }
}

impl KeyValueSessionStore<MemorySlot> {
    pub fn in_memory() -> Self {
        Self::new(MemorySlot::new())
    }
}

#[async_trait]
impl<S: KeyValueSlot> SessionRecordStore for KeyValueSessionStore<S> {
    async fn append(&self, record: &StoredRecord) -> Result<(), StoreError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StoreError::unavailable("write lock poisoned"))?;

        let blob = RecordBlob::append_encoded(&self.read_blob()?, record)?;
        self.slot.set(SAVED_KEY, &blob)?;
        info!(label = %record.label, "appended session to key-value slot");
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<StoredRecord>, StoreError> {
        Ok(RecordBlob::parse(&self.read_blob()?).records())
    }

    async fn delete_at(&self, index: usize) -> Result<(), StoreError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StoreError::unavailable("write lock poisoned"))?;

        let mut blob = RecordBlob::parse(&self.read_blob()?);
        match blob.remove(index) {
            Some(removed) => {
                self.slot.set(SAVED_KEY, &blob.to_blob())?;
                info!(label = %removed.label, index, "deleted session from key-value slot");
            }
            None => debug!(index, "delete on empty key-value slot ignored"),
        }
        Ok(())
    }
}

#[async_trait]
impl<S: KeyValueSlot> ProfileRepository for KeyValueSessionStore<S> {
    async fn load_name(&self) -> Result<Option<String>, StoreError> {
        self.slot.get(NAME_KEY)
    }

    async fn save_name(&self, name: &str) -> Result<(), StoreError> {
        self.slot.set(NAME_KEY, name)
    }
}
