//! Backend selection by install mode.
//!
//! The profile always lives in the key-value slot. Sessions go to the slot
//! in a browser tab and to the ledger when installed.

use crate::key_value_store::{FileSlot, KeyValueSessionStore};
use crate::ledger_store::LedgerSessionStore;
use crate::paths::NostalgiaPaths;
use anyhow::{Context, Result};
use nostalgia_core::install_mode::InstallMode;
use nostalgia_core::session::SessionRecordStore;
use nostalgia_core::user::ProfileRepository;
use std::sync::Arc;
use tracing::info;

/// The repositories handed to the application layer.
#[derive(Clone)]
pub struct StorageBackends {
    pub records: Arc<dyn SessionRecordStore>,
    pub profile: Arc<dyn ProfileRepository>,
}

impl StorageBackends {
    /// Opens the backends for the given install mode.
    pub fn open(install_mode: InstallMode, paths: &NostalgiaPaths) -> Result<Self> {
        let slot_path = paths
            .slot_file()
            .map_err(|e| anyhow::anyhow!("Failed to resolve slot file: {}", e))?;
        let slot = Arc::new(KeyValueSessionStore::new(FileSlot::new(slot_path.clone())));

        let records: Arc<dyn SessionRecordStore> = match install_mode {
            InstallMode::BrowserTab => slot.clone(),
            InstallMode::Installed => {
                let ledger_path = paths
                    .ledger_file()
                    .map_err(|e| anyhow::anyhow!("Failed to resolve ledger file: {}", e))
                    .context("installed mode needs a data directory")?;
                Arc::new(LedgerSessionStore::new(ledger_path))
            }
        };

        info!(?install_mode, slot = %slot_path.display(), "storage backends ready");
        Ok(Self {
            records,
            profile: slot,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nostalgia_core::session::{Session, StoredRecord};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_browser_tab_uses_slot() {
        let temp_dir = TempDir::new().unwrap();
        let paths = NostalgiaPaths::new(Some(temp_dir.path().to_path_buf()));
        let backends = StorageBackends::open(InstallMode::BrowserTab, &paths).unwrap();

        backends
            .records
            .append(&StoredRecord::new("tab", Session::new()))
            .await
            .unwrap();

        assert!(paths.slot_file().unwrap().exists());
        assert!(!paths.ledger_file().unwrap().exists());
    }

    #[tokio::test]
    async fn test_installed_uses_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let paths = NostalgiaPaths::new(Some(temp_dir.path().to_path_buf()));
        let backends = StorageBackends::open(InstallMode::Installed, &paths).unwrap();

        backends
            .records
            .append(&StoredRecord::new("app", Session::new()))
            .await
            .unwrap();
        backends.profile.save_name("Ana").await.unwrap();

        assert!(paths.ledger_file().unwrap().exists());
        assert_eq!(
            backends.profile.load_name().await.unwrap().as_deref(),
            Some("Ana")
        );
    }
}
