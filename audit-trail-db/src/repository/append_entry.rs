use async_trait::async_trait;

use crate::models::audit::AuditEntryModel;

/// Repository trait for appending one audit entry
///
/// Each entry is an independent write: there is no transaction spanning the
/// entries of one save, so a failure part-way through a batch leaves the
/// earlier entries committed.
///
/// # Example
/// ```ignore
/// #[async_trait]
/// impl AppendEntry for AuditEntryRepositoryImpl {
///     async fn append(&self, entry: &AuditEntryModel) -> Result<AuditEntryModel, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait AppendEntry: Send + Sync {
    /// Append the entry, returning it as stored
    async fn append(
        &self,
        entry: &AuditEntryModel,
    ) -> Result<AuditEntryModel, Box<dyn std::error::Error + Send + Sync>>;
}
