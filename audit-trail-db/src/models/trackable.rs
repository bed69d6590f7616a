use super::identifiable::Identifiable;

/// Trait for records whose field-level changes are written to the audit trail.
///
/// A record declares its audited fields statically and renders each value to a
/// string on demand; the change tracker diffs those renderings against its
/// baseline snapshot. Two contracts matter:
///
/// - `field_names` is the declaration order of the record's persisted fields;
///   audit entries for one save are emitted in exactly this order.
/// - `field_value` must be stable: the same underlying value always renders
///   to the same string, because renderings are compared for equality to
///   detect change. `None` means the field currently has no value, which is
///   distinct from an empty string.
pub trait Trackable: Identifiable + Send + Sync {
    /// Logical type name recorded against each audit entry.
    const MODEL_NAME: &'static str;

    /// The persisted field names, in declaration order.
    fn field_names() -> &'static [&'static str];

    /// Stable string rendering of one field's current value.
    fn field_value(&self, field: &str) -> Option<String>;

    /// Name of the identity field. It is excluded from delete-time auditing.
    fn identity_field() -> &'static str {
        "id"
    }
}
