use async_trait::async_trait;

use crate::models::trackable::Trackable;

/// Repository trait for writing a tracked record to its backing store
///
/// The change tracker calls this before computing any diff, so a persistence
/// failure aborts a save with no audit side effects.
///
/// # Example
/// ```ignore
/// #[async_trait]
/// impl PersistRecord<NoteModel> for NoteRepositoryImpl {
///     async fn persist(&self, record: &NoteModel) -> Result<(), Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait PersistRecord<T: Trackable>: Send + Sync {
    /// Write the record's current state, creating or updating as needed
    async fn persist(&self, record: &T) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
