//! Shared fixtures for the engine's test suite.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::audit::{ActorModel, AuditEntryModel};
use crate::models::creatable::Creatable;
use crate::models::identifiable::Identifiable;
use crate::models::trackable::Trackable;
use crate::repository::append_entry::AppendEntry;
use crate::repository::persist::PersistRecord;
use crate::store::memory::MemoryAuditStore;

/// A small tracked record with one field of every interesting shape:
/// identity, plain strings, a bool, and an optional value.
#[derive(Debug, Clone)]
pub struct NoteModel {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub pinned: bool,
    pub archive_reason: Option<String>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Identifiable for NoteModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Creatable for NoteModel {
    fn created_by(&self) -> Uuid {
        self.created_by
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Trackable for NoteModel {
    const MODEL_NAME: &'static str = "Note";

    fn field_names() -> &'static [&'static str] {
        &["id", "name", "description", "pinned", "archive_reason"]
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "id" => Some(self.id.to_string()),
            "name" => Some(self.name.clone()),
            "description" => Some(self.description.clone()),
            "pinned" => Some(self.pinned.to_string()),
            "archive_reason" => self.archive_reason.clone(),
            _ => None,
        }
    }
}

pub fn create_test_note() -> NoteModel {
    NoteModel {
        id: Uuid::new_v4(),
        name: "the round window".to_string(),
        description: "it's round".to_string(),
        pinned: true,
        archive_reason: None,
        created_by: Uuid::new_v4(),
        created_at: Utc::now(),
    }
}

pub fn create_test_actor() -> ActorModel {
    ActorModel {
        id: Uuid::new_v4(),
        username: heapless::String::try_from("it123").unwrap(),
        full_name: Some(heapless::String::try_from("Ivanna Tinkle").unwrap()),
    }
}

/// Record store whose persist always fails.
pub struct FailingRecordStore;

#[async_trait]
impl<R: Trackable> PersistRecord<R> for FailingRecordStore {
    async fn persist(&self, _record: &R) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Err("record store unavailable".into())
    }
}

/// Audit store that accepts a fixed number of appends, then fails.
pub struct FlakyAuditStore {
    pub inner: MemoryAuditStore,
    remaining: AtomicUsize,
}

impl FlakyAuditStore {
    pub fn failing_after(successes: usize) -> Self {
        Self {
            inner: MemoryAuditStore::new(),
            remaining: AtomicUsize::new(successes),
        }
    }
}

#[async_trait]
impl AppendEntry for FlakyAuditStore {
    async fn append(
        &self,
        entry: &AuditEntryModel,
    ) -> Result<AuditEntryModel, Box<dyn std::error::Error + Send + Sync>> {
        let allowed = self
            .remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if allowed {
            self.inner.append(entry).await
        } else {
            Err("audit store unavailable".into())
        }
    }
}
