use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Identifiable;

/// # Documentation
/// - The durable record an identified actor binding resolves against.
/// - Audit entries reference actors by id only, so a rename does not rewrite
///   history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorModel {
    pub id: Uuid,
    pub username: HeaplessString<150>,
    pub full_name: Option<HeaplessString<255>>,
}

impl Identifiable for ActorModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

/// Outcome of resolving the thread's actor binding at audit time.
#[derive(Debug, Clone)]
pub enum CurrentActor {
    /// Nothing bound, or the bound id no longer resolves to an actor.
    Unknown,
    /// Explicitly anonymous; audited with null attribution.
    Anonymous,
    /// A resolved, existing actor.
    Resolved(ActorModel),
}

impl CurrentActor {
    /// Whether auditing may proceed (unknown suppresses entry creation).
    pub fn is_known(&self) -> bool {
        !matches!(self, CurrentActor::Unknown)
    }

    /// The actor id to record on an entry; `None` for the anonymous actor.
    pub fn changed_by(&self) -> Option<Uuid> {
        match self {
            CurrentActor::Resolved(actor) => Some(actor.id),
            _ => None,
        }
    }
}
