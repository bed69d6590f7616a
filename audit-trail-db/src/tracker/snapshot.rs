use std::collections::HashMap;

use crate::models::trackable::Trackable;

/// A record's last-known field renderings, the diff point for its next save.
///
/// Owned exclusively by one tracker; captured at construction and replaced
/// after every successful save. Lookups key off the record's declared field
/// names, so iteration order is the caller's concern (the tracker walks the
/// declared order, never the map's).
#[derive(Debug, Clone, Default)]
pub(crate) struct Snapshot {
    values: HashMap<&'static str, Option<String>>,
}

impl Snapshot {
    pub(crate) fn capture<R: Trackable>(record: &R) -> Self {
        let mut values = HashMap::with_capacity(R::field_names().len());
        for field in R::field_names() {
            values.insert(*field, record.field_value(field));
        }
        Self { values }
    }

    /// The baseline rendering for a field; `None` when it had no value.
    pub(crate) fn value(&self, field: &str) -> Option<&str> {
        self.values.get(field).and_then(|value| value.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::test_fixtures::create_test_note;

    #[test]
    fn test_capture_renders_every_declared_field() {
        let note = create_test_note();
        let snapshot = Snapshot::capture(&note);

        let id = note.id.to_string();
        assert_eq!(snapshot.value("id"), Some(id.as_str()));
        assert_eq!(snapshot.value("name"), Some("the round window"));
        assert_eq!(snapshot.value("description"), Some("it's round"));
        assert_eq!(snapshot.value("pinned"), Some("true"));
        assert_eq!(snapshot.value("archive_reason"), None);
    }

    #[test]
    fn test_capture_is_detached_from_the_record() {
        let mut note = create_test_note();
        let snapshot = Snapshot::capture(&note);

        note.name = "the square window".to_string();
        assert_eq!(snapshot.value("name"), Some("the round window"));
    }
}
