//! Ledger backend for installed mode.
//!
//! The whole session blob is one value in a larger-capacity file, read and
//! rewritten asynchronously. Writes go to a tmp file that is renamed into
//! place, so a crash mid-write leaves the previous blob intact.

use async_trait::async_trait;
use nostalgia_core::StoreError;
use nostalgia_core::session::{RecordBlob, SessionRecordStore, StoredRecord};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, info};

pub struct LedgerSessionStore {
    path: PathBuf,
    /// Held for the full read-modify-write of `append` and `delete_at`.
    write_lock: Mutex<()>,
}

impl LedgerSessionStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_blob(&self) -> Result<String, StoreError> {
        match fs::read_to_string(&self.path).await {
            Ok(blob) => Ok(blob),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_blob(&self, blob: &str) -> Result<(), StoreError> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| StoreError::unavailable("ledger path has no parent directory"))?;
        fs::create_dir_all(parent).await?;

        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "ledger".to_string());
        let tmp_path = parent.join(format!(".{}.tmp", file_name));

        let mut tmp_file = fs::File::create(&tmp_path).await?;
        tmp_file.write_all(blob.as_bytes()).await?;
        tmp_file.sync_all().await?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl SessionRecordStore for LedgerSessionStore {
    async fn append(&self, record: &StoredRecord) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        let blob = RecordBlob::append_encoded(&self.read_blob().await?, record)?;
        self.write_blob(&blob).await?;
        info!(label = %record.label, path = %self.path.display(), "appended session to ledger");
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<StoredRecord>, StoreError> {
        Ok(RecordBlob::parse(&self.read_blob().await?).records())
    }

    async fn delete_at(&self, index: usize) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut blob = RecordBlob::parse(&self.read_blob().await?);
        match blob.remove(index) {
            Some(removed) => {
                self.write_blob(&blob.to_blob()).await?;
                info!(label = %removed.label, index, "deleted session from ledger");
            }
            None => debug!(index, "delete on empty ledger ignored"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nostalgia_core::session::Session;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn record(label: &str) -> StoredRecord {
        StoredRecord::new(
            label,
            Session {
                year: "2008".to_string(),
                preferences: label.to_string(),
                topics: String::new(),
            },
        )
    }

    #[tokio::test]
    async fn test_missing_ledger_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = LedgerSessionStore::new(temp_dir.path().join("sessions.ledger"));
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_append_list_delete() {
        let temp_dir = TempDir::new().unwrap();
        let store = LedgerSessionStore::new(temp_dir.path().join("data").join("sessions.ledger"));

        for label in ["a", "b", "c"] {
            store.append(&record(label)).await.unwrap();
        }
        assert_eq!(
            store.list_all().await.unwrap(),
            vec![record("a"), record("b"), record("c")]
        );

        store.delete_at(1).await.unwrap();
        assert_eq!(store.list_all().await.unwrap(), vec![record("a"), record("c")]);
        assert!(!temp_dir.path().join("data").join(".sessions.ledger.tmp").exists());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_are_not_lost() {
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(LedgerSessionStore::new(temp_dir.path().join("sessions.ledger")));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.append(&record(&i.to_string())).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.list_all().await.unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_unwritable_location_is_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "file, not a directory").unwrap();

        let store = LedgerSessionStore::new(blocker.join("sessions.ledger"));
        let err = store.append(&record("x")).await.unwrap_err();
        assert!(err.is_unavailable());
    }
}
