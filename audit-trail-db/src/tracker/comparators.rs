use std::collections::HashMap;

type Predicate = dyn Fn(Option<&str>, Option<&str>) -> bool + Send + Sync;

/// Injected per-field change predicates consulted while diffing a save.
///
/// The default for every field is value inequality over the string
/// renderings. A host replaces the predicate for individual fields, most
/// commonly with [`ignore`](FieldComparators::ignore) to keep a noisy field
/// out of the trail. Suppression applies to updates only; delete-time
/// auditing records every non-empty field without consulting these
/// predicates.
#[derive(Default)]
pub struct FieldComparators {
    overrides: HashMap<&'static str, Box<Predicate>>,
}

impl FieldComparators {
    pub fn new() -> Self {
        Self::default()
    }

    /// Never report the field as changed, excluding it from update auditing.
    pub fn ignore(self, field: &'static str) -> Self {
        self.compare_with(field, |_, _| false)
    }

    /// Replace the change predicate for one field. The predicate receives
    /// the baseline and current renderings and returns whether the
    /// transition counts as a change.
    pub fn compare_with<F>(mut self, field: &'static str, predicate: F) -> Self
    where
        F: Fn(Option<&str>, Option<&str>) -> bool + Send + Sync + 'static,
    {
        self.overrides.insert(field, Box::new(predicate));
        self
    }

    /// Whether `old -> new` counts as a change for this field.
    pub fn changed(&self, field: &str, old: Option<&str>, new: Option<&str>) -> bool {
        match self.overrides.get(field) {
            Some(predicate) => predicate(old, new),
            None => old != new,
        }
    }
}
