//! In-memory store implementations.
//!
//! Backend-free implementations of the audit repository traits, used by the
//! engine's own test suite and by hosts that want change tracking without a
//! database (tests, tooling). Entries are held in append order, which is
//! also chronological order.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::models::audit::{ActorModel, AuditEntryModel};
use crate::models::trackable::Trackable;
use crate::repository::append_entry::AppendEntry;
use crate::repository::find_by_actor::FindByActor;
use crate::repository::find_by_record::FindByRecord;
use crate::repository::load_entry::LoadEntry;
use crate::repository::pagination::{Page, PageRequest};
use crate::repository::persist::PersistRecord;
use crate::repository::remove::RemoveRecord;
use crate::repository::search_entries::{EntryFilter, SearchEntries};
use crate::repository::actor_directory::ActorDirectory;

/// Append-only audit entry store backed by a Vec
#[derive(Debug, Default)]
pub struct MemoryAuditStore {
    entries: RwLock<Vec<AuditEntryModel>>,
}

impl MemoryAuditStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries appended so far
    pub fn count(&self) -> usize {
        self.entries.read().len()
    }

    /// Snapshot of all entries, in append order
    pub fn entries(&self) -> Vec<AuditEntryModel> {
        self.entries.read().clone()
    }
}

#[async_trait]
impl AppendEntry for MemoryAuditStore {
    async fn append(
        &self,
        entry: &AuditEntryModel,
    ) -> Result<AuditEntryModel, Box<dyn std::error::Error + Send + Sync>> {
        self.entries.write().push(entry.clone());
        Ok(entry.clone())
    }
}

#[async_trait]
impl LoadEntry for MemoryAuditStore {
    async fn load(
        &self,
        id: Uuid,
    ) -> Result<Option<AuditEntryModel>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.entries.read().iter().find(|entry| entry.id == id).cloned())
    }
}

#[async_trait]
impl FindByRecord for MemoryAuditStore {
    async fn find_by_record(
        &self,
        model: &str,
        model_pk: &str,
        page: PageRequest,
    ) -> Result<Page<AuditEntryModel>, Box<dyn std::error::Error + Send + Sync>> {
        let filter = EntryFilter::any().model(model).model_pk(model_pk);
        Ok(paged(&self.entries.read(), &filter, page))
    }
}

#[async_trait]
impl FindByActor for MemoryAuditStore {
    async fn find_by_actor(
        &self,
        actor_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<AuditEntryModel>, Box<dyn std::error::Error + Send + Sync>> {
        let filter = EntryFilter::any().changed_by(actor_id);
        Ok(paged(&self.entries.read(), &filter, page))
    }
}

#[async_trait]
impl SearchEntries for MemoryAuditStore {
    async fn search(
        &self,
        filter: &EntryFilter,
        page: PageRequest,
    ) -> Result<Page<AuditEntryModel>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(paged(&self.entries.read(), filter, page))
    }
}

fn matches(entry: &AuditEntryModel, filter: &EntryFilter) -> bool {
    if let Some(model) = &filter.model {
        if entry.model.as_str() != model {
            return false;
        }
    }
    if let Some(model_pk) = &filter.model_pk {
        if entry.model_pk.as_str() != model_pk {
            return false;
        }
    }
    if let Some(field) = &filter.field {
        if entry.field.as_str() != field {
            return false;
        }
    }
    if let Some(actor_id) = filter.changed_by {
        if entry.changed_by != Some(actor_id) {
            return false;
        }
    }
    if let Some(from) = filter.from {
        if entry.changed_at < from {
            return false;
        }
    }
    if let Some(until) = filter.until {
        if entry.changed_at >= until {
            return false;
        }
    }
    true
}

fn paged(entries: &[AuditEntryModel], filter: &EntryFilter, page: PageRequest) -> Page<AuditEntryModel> {
    let mut matched: Vec<AuditEntryModel> = entries
        .iter()
        .filter(|entry| matches(entry, filter))
        .cloned()
        .collect();
    // Newest first; append order is chronological, so reversing keeps
    // same-timestamp entries deterministic.
    matched.reverse();

    let total = matched.len();
    let items = matched
        .into_iter()
        .skip(page.offset)
        .take(page.limit)
        .collect();
    Page::new(items, total, page.limit, page.offset)
}

/// Actor directory backed by a HashMap
#[derive(Debug, Default)]
pub struct MemoryActorDirectory {
    actors: RwLock<HashMap<Uuid, ActorModel>>,
}

impl MemoryActorDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, actor: ActorModel) {
        self.actors.write().insert(actor.id, actor);
    }

    /// Drops an actor, making bindings to it resolve as unknown
    pub fn remove(&self, id: Uuid) {
        self.actors.write().remove(&id);
    }
}

#[async_trait]
impl ActorDirectory for MemoryActorDirectory {
    async fn find_actor(
        &self,
        id: Uuid,
    ) -> Result<Option<ActorModel>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.actors.read().get(&id).cloned())
    }
}

/// Record store backed by a HashMap, keyed by record identity
#[derive(Debug)]
pub struct MemoryRecordStore<R: Trackable + Clone> {
    records: RwLock<HashMap<Uuid, R>>,
}

impl<R: Trackable + Clone> MemoryRecordStore<R> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    pub fn get(&self, id: Uuid) -> Option<R> {
        self.records.read().get(&id).cloned()
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.records.read().contains_key(&id)
    }

    pub fn count(&self) -> usize {
        self.records.read().len()
    }
}

impl<R: Trackable + Clone> Default for MemoryRecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Trackable + Clone> PersistRecord<R> for MemoryRecordStore<R> {
    async fn persist(&self, record: &R) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.records.write().insert(record.get_id(), record.clone());
        Ok(())
    }
}

#[async_trait]
impl<R: Trackable + Clone> RemoveRecord<R> for MemoryRecordStore<R> {
    async fn remove(&self, record: &R) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.records.write().remove(&record.get_id());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn entry(model: &str, pk: &str, field: &str, who: Option<Uuid>) -> AuditEntryModel {
        AuditEntryModel::new(who, model, pk, field, Some("old"), Some("new"))
    }

    #[tokio::test]
    async fn test_append_and_load() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let store = MemoryAuditStore::new();

        let stored = store.append(&entry("Note", "1", "name", None)).await?;
        assert_eq!(store.count(), 1);

        let loaded = store.load(stored.id).await?;
        assert!(loaded.is_some());
        assert_eq!(loaded.unwrap().field.as_str(), "name");

        let missing = store.load(Uuid::new_v4()).await?;
        assert!(missing.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_find_by_record_pages_newest_first(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let store = MemoryAuditStore::new();
        for i in 0..5 {
            let field = format!("field_{i}");
            store.append(&entry("Note", "1", &field, None)).await?;
        }
        store.append(&entry("Other", "1", "name", None)).await?;

        let page = store.find_by_record("Note", "1", PageRequest::new(2, 0)).await?;
        assert_eq!(page.total, 5);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].field.as_str(), "field_4");
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_more());

        let last = store.find_by_record("Note", "1", PageRequest::new(2, 4)).await?;
        assert_eq!(last.items.len(), 1);
        assert_eq!(last.items[0].field.as_str(), "field_0");
        assert!(!last.has_more());

        Ok(())
    }

    #[tokio::test]
    async fn test_find_by_actor_skips_anonymous_entries(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let store = MemoryAuditStore::new();
        let actor_id = Uuid::new_v4();

        store.append(&entry("Note", "1", "name", Some(actor_id))).await?;
        store.append(&entry("Note", "1", "description", None)).await?;
        store.append(&entry("Note", "2", "name", Some(Uuid::new_v4()))).await?;

        let page = store.find_by_actor(actor_id, PageRequest::default()).await?;
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].changed_by, Some(actor_id));

        Ok(())
    }

    #[tokio::test]
    async fn test_search_combines_filters() -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    {
        let store = MemoryAuditStore::new();
        store.append(&entry("Note", "1", "name", None)).await?;
        store.append(&entry("Note", "1", "description", None)).await?;
        store.append(&entry("Note", "2", "name", None)).await?;

        let filter = EntryFilter::any().model("Note").field("name");
        let page = store.search(&filter, PageRequest::default()).await?;
        assert_eq!(page.total, 2);

        let narrowed = EntryFilter::any().model("Note").model_pk("1").field("name");
        let page = store.search(&narrowed, PageRequest::default()).await?;
        assert_eq!(page.total, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_search_honors_the_time_range(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let store = MemoryAuditStore::new();
        let stored = store.append(&entry("Note", "1", "name", None)).await?;

        let hit = EntryFilter::any().between(
            stored.changed_at - Duration::seconds(1),
            stored.changed_at + Duration::seconds(1),
        );
        assert_eq!(store.search(&hit, PageRequest::default()).await?.total, 1);

        let miss = EntryFilter::any().between(
            stored.changed_at + Duration::seconds(1),
            stored.changed_at + Duration::seconds(2),
        );
        assert_eq!(store.search(&miss, PageRequest::default()).await?.total, 0);

        // The upper bound is exclusive.
        let boundary = EntryFilter::any().between(
            stored.changed_at - Duration::seconds(1),
            stored.changed_at,
        );
        assert_eq!(store.search(&boundary, PageRequest::default()).await?.total, 0);

        Ok(())
    }
}
