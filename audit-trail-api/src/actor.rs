use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// # Documentation
/// - The durable reference bound to a thread while a unit of work runs.
/// - The actor id is stored instead of a live record so later reads are not
///   affected by the underlying record being renamed or reloaded.
/// - `Anonymous` is an explicit sentinel, distinct from no binding at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorBinding {
    /// A request handled without an identified user.
    Anonymous,
    /// An identified actor, by durable id.
    Identified(Uuid),
}

impl ActorBinding {
    /// Returns the actor id carried by this binding, if any.
    pub fn actor_id(&self) -> Option<Uuid> {
        match self {
            ActorBinding::Anonymous => None,
            ActorBinding::Identified(id) => Some(*id),
        }
    }
}
