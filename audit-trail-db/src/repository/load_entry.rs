use async_trait::async_trait;
use uuid::Uuid;

use crate::models::audit::AuditEntryModel;

/// Repository trait for loading one audit entry by id
#[async_trait]
pub trait LoadEntry: Send + Sync {
    /// Load an entry by its unique identifier, `None` if absent
    async fn load(
        &self,
        id: Uuid,
    ) -> Result<Option<AuditEntryModel>, Box<dyn std::error::Error + Send + Sync>>;
}
