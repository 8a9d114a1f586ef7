//! Profile repository trait.

use crate::error::StoreError;
use async_trait::async_trait;

/// Key under which the display name is kept in the key-value slot.
pub const NAME_KEY: &str = "nostalgiaTokName";

/// Persists the user's display name across sessions.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Returns the stored name, if the user has entered one before.
    async fn load_name(&self) -> Result<Option<String>, StoreError>;

    /// Stores the name, replacing any previous one.
    async fn save_name(&self, name: &str) -> Result<(), StoreError>;
}
