//! Storage backends, paths and configuration loading for nostalgiaTok.

pub mod backend;
pub mod config_service;
pub mod key_value_store;
pub mod ledger_store;
pub mod paths;
pub mod storage;

pub use crate::backend::StorageBackends;
pub use crate::config_service::ConfigService;
pub use crate::key_value_store::{FileSlot, KeyValueSessionStore, KeyValueSlot, MemorySlot};
pub use crate::ledger_store::LedgerSessionStore;
pub use crate::paths::NostalgiaPaths;
