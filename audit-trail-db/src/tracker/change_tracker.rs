use tracing::warn;

use audit_trail_api::context::ACTOR_BINDING_HINT;
use audit_trail_api::error::AuditError;

use crate::models::audit::AuditEntryModel;
use crate::models::trackable::Trackable;
use crate::repository::actor_directory::{resolve_current_actor, ActorDirectory};
use crate::repository::append_entry::AppendEntry;
use crate::repository::persist::PersistRecord;
use crate::repository::remove::RemoveRecord;

use super::comparators::FieldComparators;
use super::snapshot::Snapshot;

/// Lifecycle of a tracked record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrackerState {
    Transient,
    Persisted,
    Deleted,
}

/// One changed field, with the full (unclipped) renderings.
struct FieldChange {
    field: &'static str,
    old: Option<String>,
    new: Option<String>,
}

/// # Documentation
/// - Wraps a persistable record and audits its field-level changes.
/// - On save: persists first, then diffs current renderings against the
///   baseline snapshot through the per-field comparators and appends one
///   audit entry per changed field, attributed to the thread's bound actor.
/// - On delete: appends one entry per non-empty baseline field (identity
///   excluded, comparators not consulted), then removes the record.
/// - An unknown actor suppresses entry creation and logs a two-part warning
///   instead; the save or delete itself is unaffected.
pub struct ChangeTracker<R: Trackable> {
    record: R,
    baseline: Snapshot,
    state: TrackerState,
    comparators: FieldComparators,
}

impl<R: Trackable> ChangeTracker<R> {
    /// Tracks a record that has not been persisted yet. Its first save
    /// creates it and is not audited.
    pub fn new(record: R) -> Self {
        let baseline = Snapshot::capture(&record);
        Self {
            record,
            baseline,
            state: TrackerState::Transient,
            comparators: FieldComparators::new(),
        }
    }

    /// Tracks a record loaded from storage, capturing the baseline for the
    /// next diff.
    pub fn for_persisted(record: R) -> Self {
        let mut tracker = Self::new(record);
        tracker.state = TrackerState::Persisted;
        tracker
    }

    /// Replaces the per-field comparators.
    pub fn with_comparators(mut self, comparators: FieldComparators) -> Self {
        self.comparators = comparators;
        self
    }

    pub fn record(&self) -> &R {
        &self.record
    }

    pub fn record_mut(&mut self) -> &mut R {
        &mut self.record
    }

    pub fn into_record(self) -> R {
        self.record
    }

    pub fn is_persisted(&self) -> bool {
        self.state == TrackerState::Persisted
    }

    pub fn is_deleted(&self) -> bool {
        self.state == TrackerState::Deleted
    }

    /// Persists the record and audits the resulting field transitions.
    ///
    /// The underlying persist runs first, so its failure propagates with no
    /// audit side effects. Entries are appended in declared field order and
    /// returned; the baseline is refreshed afterwards whether or not any
    /// entry was written. A first-time save creates the record and emits
    /// nothing.
    pub async fn save<P, E, D>(
        &mut self,
        records: &P,
        entries: &E,
        directory: &D,
    ) -> Result<Vec<AuditEntryModel>, Box<dyn std::error::Error + Send + Sync>>
    where
        P: PersistRecord<R> + ?Sized,
        E: AppendEntry + ?Sized,
        D: ActorDirectory + ?Sized,
    {
        match self.state {
            TrackerState::Deleted => Err(AuditError::RecordDeleted(self.describe()).into()),
            TrackerState::Transient => {
                records.persist(&self.record).await?;
                self.state = TrackerState::Persisted;
                self.baseline = Snapshot::capture(&self.record);
                Ok(Vec::new())
            }
            TrackerState::Persisted => {
                records.persist(&self.record).await?;

                let changes = self.changed_fields();
                let mut written = Vec::with_capacity(changes.len());
                if !changes.is_empty() {
                    let actor = resolve_current_actor(directory).await?;
                    if actor.is_known() {
                        let model_pk = self.record.get_id().to_string();
                        for change in &changes {
                            let entry = AuditEntryModel::new(
                                actor.changed_by(),
                                R::MODEL_NAME,
                                &model_pk,
                                change.field,
                                change.old.as_deref(),
                                change.new.as_deref(),
                            );
                            written.push(entries.append(&entry).await?);
                        }
                    } else {
                        for change in &changes {
                            warn!(
                                model = R::MODEL_NAME,
                                model_pk = %self.record.get_id(),
                                field = change.field,
                                old = ?change.old,
                                new = ?change.new,
                                "change made by an unknown actor"
                            );
                            warn!("{ACTOR_BINDING_HINT}");
                        }
                    }
                }

                self.baseline = Snapshot::capture(&self.record);
                Ok(written)
            }
        }
    }

    /// Audits the record's final values, then removes it.
    ///
    /// Every non-empty baseline field except the identity field gets one
    /// entry with its prior value and no new value; the comparators are not
    /// consulted. The remove runs even when an unknown actor suppressed the
    /// entries. Afterwards the tracker is terminal: further saves or
    /// deletes error.
    pub async fn delete<P, E, D>(
        &mut self,
        records: &P,
        entries: &E,
        directory: &D,
    ) -> Result<Vec<AuditEntryModel>, Box<dyn std::error::Error + Send + Sync>>
    where
        P: RemoveRecord<R> + ?Sized,
        E: AppendEntry + ?Sized,
        D: ActorDirectory + ?Sized,
    {
        match self.state {
            TrackerState::Deleted => Err(AuditError::RecordDeleted(self.describe()).into()),
            TrackerState::Transient => Err(AuditError::NotPersisted(self.describe()).into()),
            TrackerState::Persisted => {
                let actor = resolve_current_actor(directory).await?;
                let mut written = Vec::new();
                if actor.is_known() {
                    let model_pk = self.record.get_id().to_string();
                    for field in R::field_names().iter().copied() {
                        if field == R::identity_field() {
                            continue;
                        }
                        let value = match self.baseline.value(field) {
                            Some(value) if !value.is_empty() => value,
                            _ => continue,
                        };
                        let entry = AuditEntryModel::new(
                            actor.changed_by(),
                            R::MODEL_NAME,
                            &model_pk,
                            field,
                            Some(value),
                            None,
                        );
                        written.push(entries.append(&entry).await?);
                    }
                } else {
                    warn!(
                        model = R::MODEL_NAME,
                        model_pk = %self.record.get_id(),
                        "delete made by an unknown actor"
                    );
                    warn!("{ACTOR_BINDING_HINT}");
                }

                records.remove(&self.record).await?;
                self.state = TrackerState::Deleted;
                Ok(written)
            }
        }
    }

    fn changed_fields(&self) -> Vec<FieldChange> {
        R::field_names()
            .iter()
            .copied()
            .filter_map(|field| {
                let old = self.baseline.value(field).map(str::to_owned);
                let new = self.record.field_value(field);
                if self
                    .comparators
                    .changed(field, old.as_deref(), new.as_deref())
                {
                    Some(FieldChange { field, old, new })
                } else {
                    None
                }
            })
            .collect()
    }

    fn describe(&self) -> String {
        format!("{}:{}", R::MODEL_NAME, self.record.get_id())
    }
}
