use async_trait::async_trait;
use uuid::Uuid;

use crate::models::audit::AuditEntryModel;
use crate::repository::pagination::{Page, PageRequest};

/// Repository trait for loading the changes attributed to one actor
#[async_trait]
pub trait FindByActor: Send + Sync {
    /// Load entries whose `changed_by` is the given actor, newest first
    async fn find_by_actor(
        &self,
        actor_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<AuditEntryModel>, Box<dyn std::error::Error + Send + Sync>>;
}
