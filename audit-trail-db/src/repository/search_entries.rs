use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::audit::AuditEntryModel;
use crate::repository::pagination::{Page, PageRequest};

/// Criteria for searching the audit trail; unset criteria match everything
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    /// Logical record type name
    pub model: Option<String>,
    /// String-rendered primary key
    pub model_pk: Option<String>,
    /// Changed field name
    pub field: Option<String>,
    /// Attributed actor id
    pub changed_by: Option<Uuid>,
    /// Inclusive lower bound on `changed_at`
    pub from: Option<DateTime<Utc>>,
    /// Exclusive upper bound on `changed_at`
    pub until: Option<DateTime<Utc>>,
}

impl EntryFilter {
    /// A filter matching every entry
    pub fn any() -> Self {
        Self::default()
    }

    pub fn model(mut self, model: &str) -> Self {
        self.model = Some(model.to_string());
        self
    }

    pub fn model_pk(mut self, model_pk: &str) -> Self {
        self.model_pk = Some(model_pk.to_string());
        self
    }

    pub fn field(mut self, field: &str) -> Self {
        self.field = Some(field.to_string());
        self
    }

    pub fn changed_by(mut self, actor_id: Uuid) -> Self {
        self.changed_by = Some(actor_id);
        self
    }

    pub fn between(mut self, from: DateTime<Utc>, until: DateTime<Utc>) -> Self {
        self.from = Some(from);
        self.until = Some(until);
        self
    }
}

/// Repository trait for filtered search over the audit trail
///
/// # Example
/// ```ignore
/// let filter = EntryFilter::any().model("Note").field("description");
/// let page = repo.search(&filter, PageRequest::default()).await?;
/// ```
#[async_trait]
pub trait SearchEntries: Send + Sync {
    /// Load entries matching the filter, newest first
    async fn search(
        &self,
        filter: &EntryFilter,
        page: PageRequest,
    ) -> Result<Page<AuditEntryModel>, Box<dyn std::error::Error + Send + Sync>>;
}
