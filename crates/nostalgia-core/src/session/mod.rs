//! Session domain module.
//!
//! - `model`: the onboarding answer-set (`Session`)
//! - `record`: the `label[NTS2]json` record codec and the blob that joins records
//! - `repository`: the `SessionRecordStore` persistence trait

mod model;
mod record;
mod repository;

pub use model::Session;
pub use record::{RECORD_SEPARATOR, RecordBlob, SESSION_SEPARATOR, StoredRecord};
pub use repository::SessionRecordStore;
