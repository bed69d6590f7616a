use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Identifiable;

/// # Documentation
/// - One immutable audit entry per changed field of a tracked record.
/// - Entries are append-only: created once, never updated or deleted.
/// - `changed_by` of `None` records an explicitly anonymous actor; an unknown
///   actor never produces an entry at all.
/// - `old_value` absent means the field had no prior value; `new_value`
///   absent means the field has no new value (always the case on delete).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntryModel {
    pub id: Uuid,
    pub changed_at: DateTime<Utc>,
    pub changed_by: Option<Uuid>,
    pub model: HeaplessString<64>,
    pub model_pk: HeaplessString<255>,
    pub field: HeaplessString<64>,
    pub old_value: Option<HeaplessString<255>>,
    pub new_value: Option<HeaplessString<255>>,
}

impl AuditEntryModel {
    /// Builds an entry for one field transition, stamped with the server
    /// clock. Values longer than the column bounds are clipped; change
    /// detection always happens on the full renderings before this point.
    pub fn new(
        changed_by: Option<Uuid>,
        model: &str,
        model_pk: &str,
        field: &str,
        old_value: Option<&str>,
        new_value: Option<&str>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            changed_at: Utc::now(),
            changed_by,
            model: clip(model),
            model_pk: clip(model_pk),
            field: clip(field),
            old_value: old_value.map(clip),
            new_value: new_value.map(clip),
        }
    }
}

impl Identifiable for AuditEntryModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

/// Clips a rendering to the column capacity, at a char boundary.
pub(crate) fn clip<const N: usize>(value: &str) -> HeaplessString<N> {
    let mut out = HeaplessString::new();
    for ch in value.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stamps_identity_and_clock() {
        let before = Utc::now();
        let entry = AuditEntryModel::new(None, "Note", "1", "name", Some("a"), Some("b"));

        assert!(entry.changed_at >= before);
        assert_eq!(entry.model.as_str(), "Note");
        assert_eq!(entry.model_pk.as_str(), "1");
        assert_eq!(entry.field.as_str(), "name");
        assert_eq!(entry.old_value.as_deref(), Some("a"));
        assert_eq!(entry.new_value.as_deref(), Some("b"));
    }

    #[test]
    fn test_values_are_clipped_to_column_bounds() {
        let long = "x".repeat(300);
        let entry = AuditEntryModel::new(None, "Note", "1", "name", Some(&long), None);

        let stored = entry.old_value.unwrap();
        assert_eq!(stored.len(), 255);
        assert!(long.starts_with(stored.as_str()));
        assert_eq!(entry.new_value, None);
    }

    #[test]
    fn test_clip_respects_char_boundaries() {
        // 2-byte chars: 128 of them overflow a 255-byte column at a boundary.
        let wide = "é".repeat(200);
        let clipped: HeaplessString<255> = clip(&wide);
        assert_eq!(clipped.len(), 254);
        assert!(clipped.as_str().chars().all(|c| c == 'é'));
    }

    #[test]
    fn test_anonymous_entry_serializes_with_null_actor() {
        let entry = AuditEntryModel::new(None, "Note", "1", "name", None, Some("b"));
        let json = serde_json::to_value(&entry).unwrap();

        assert!(json["changed_by"].is_null());
        assert!(json["old_value"].is_null());
        assert_eq!(json["new_value"], "b");
    }
}
