use async_trait::async_trait;

use crate::models::trackable::Trackable;

/// Repository trait for deleting a tracked record from its backing store
///
/// The change tracker emits delete-time audit entries before calling this;
/// the remove still runs when auditing was skipped for an unknown actor.
#[async_trait]
pub trait RemoveRecord<T: Trackable>: Send + Sync {
    /// Delete the record by identity
    async fn remove(&self, record: &T) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
