use async_trait::async_trait;

use crate::models::audit::AuditEntryModel;
use crate::repository::pagination::{Page, PageRequest};

/// Repository trait for loading the audit history of one record
///
/// # Example
/// ```ignore
/// let page = repo.find_by_record("Note", &note_id.to_string(), PageRequest::new(20, 0)).await?;
/// println!("{} changes, page {} of {}", page.total, page.page_number(), page.total_pages());
/// ```
#[async_trait]
pub trait FindByRecord: Send + Sync {
    /// Load entries for the record named by model and string-rendered pk,
    /// newest first
    async fn find_by_record(
        &self,
        model: &str,
        model_pk: &str,
        page: PageRequest,
    ) -> Result<Page<AuditEntryModel>, Box<dyn std::error::Error + Send + Sync>>;
}
