//! Session record store trait.

use super::record::StoredRecord;
use crate::error::StoreError;
use async_trait::async_trait;

/// An append-only store of serialized sessions, addressed by append order.
///
/// Two backends exist (a small key-value slot and a larger ledger); which one
/// is in use is decided from the install mode and is invisible to callers.
/// All operations are async regardless of backend.
///
/// Implementations must serialize `append` and `delete_at`: both are a
/// read-modify-write of one blob and a concurrent pair would lose an update.
#[async_trait]
pub trait SessionRecordStore: Send + Sync {
    /// Appends a record after all existing ones. Never overwrites.
    async fn append(&self, record: &StoredRecord) -> Result<(), StoreError>;

    /// Returns every well-formed record in append order.
    ///
    /// An empty store yields an empty vector. Corrupt records are skipped.
    async fn list_all(&self) -> Result<Vec<StoredRecord>, StoreError>;

    /// Removes the record at `index` (taken modulo the record count) and
    /// rewrites the blob. A no-op on an empty store.
    async fn delete_at(&self, index: usize) -> Result<(), StoreError>;
}
