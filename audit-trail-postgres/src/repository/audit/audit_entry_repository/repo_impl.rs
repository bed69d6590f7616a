use async_trait::async_trait;
use audit_trail_db::models::audit::AuditEntryModel;
use audit_trail_db::repository::append_entry::AppendEntry;
use audit_trail_db::repository::find_by_actor::FindByActor;
use audit_trail_db::repository::find_by_record::FindByRecord;
use audit_trail_db::repository::load_entry::LoadEntry;
use audit_trail_db::repository::pagination::{Page, PageRequest};
use audit_trail_db::repository::search_entries::{EntryFilter, SearchEntries};
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};

/// Postgres-backed audit entry store.
///
/// Append-only: the table has insert and select paths and nothing else.
/// Every append is an independent write on the pool; there is no transaction
/// spanning the entries of one save.
pub struct AuditEntryRepositoryImpl {
    pub(crate) pool: PgPool,
}

impl AuditEntryRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for AuditEntryModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        use sqlx::Row;

        Ok(AuditEntryModel {
            id: row.try_get("id")?,
            changed_at: row.try_get("changed_at")?,
            changed_by: row.try_get("changed_by")?,
            model: get_heapless_string(row, "model")?,
            model_pk: get_heapless_string(row, "model_pk")?,
            field: get_heapless_string(row, "field")?,
            old_value: get_optional_heapless_string(row, "old_value")?,
            new_value: get_optional_heapless_string(row, "new_value")?,
        })
    }
}

#[async_trait]
impl AppendEntry for AuditEntryRepositoryImpl {
    async fn append(
        &self,
        entry: &AuditEntryModel,
    ) -> Result<AuditEntryModel, Box<dyn std::error::Error + Send + Sync>> {
        super::append::append_impl(&self.pool, entry).await
    }
}

#[async_trait]
impl LoadEntry for AuditEntryRepositoryImpl {
    async fn load(
        &self,
        id: Uuid,
    ) -> Result<Option<AuditEntryModel>, Box<dyn std::error::Error + Send + Sync>> {
        super::load::load_impl(&self.pool, id).await
    }
}

#[async_trait]
impl FindByRecord for AuditEntryRepositoryImpl {
    async fn find_by_record(
        &self,
        model: &str,
        model_pk: &str,
        page: PageRequest,
    ) -> Result<Page<AuditEntryModel>, Box<dyn std::error::Error + Send + Sync>> {
        super::find_by_record::find_by_record_impl(&self.pool, model, model_pk, page).await
    }
}

#[async_trait]
impl FindByActor for AuditEntryRepositoryImpl {
    async fn find_by_actor(
        &self,
        actor_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<AuditEntryModel>, Box<dyn std::error::Error + Send + Sync>> {
        super::find_by_actor::find_by_actor_impl(&self.pool, actor_id, page).await
    }
}

#[async_trait]
impl SearchEntries for AuditEntryRepositoryImpl {
    async fn search(
        &self,
        filter: &EntryFilter,
        page: PageRequest,
    ) -> Result<Page<AuditEntryModel>, Box<dyn std::error::Error + Send + Sync>> {
        super::search::search_impl(&self.pool, filter, page).await
    }
}
