use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::identifiable::Identifiable;

/// Trait for records that retain who created them and when
pub trait Creatable: Identifiable {
    /// Returns the id of the actor that created the record
    fn created_by(&self) -> Uuid;

    /// Returns the creation time of the record
    fn created_at(&self) -> DateTime<Utc>;
}
