use async_trait::async_trait;
use uuid::Uuid;

use audit_trail_api::actor::ActorBinding;
use audit_trail_api::context;

use crate::models::audit::{ActorModel, CurrentActor};

/// Repository trait resolving a bound actor id to its durable record
#[async_trait]
pub trait ActorDirectory: Send + Sync {
    /// Look up an actor by id, `None` if no such actor exists
    async fn find_actor(
        &self,
        id: Uuid,
    ) -> Result<Option<ActorModel>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Resolves the current thread's actor binding against the directory.
///
/// An unset binding and a bound id that no longer resolves both yield
/// [`CurrentActor::Unknown`]; the anonymous sentinel passes through without a
/// directory read.
pub async fn resolve_current_actor<D>(
    directory: &D,
) -> Result<CurrentActor, Box<dyn std::error::Error + Send + Sync>>
where
    D: ActorDirectory + ?Sized,
{
    match context::current_actor() {
        None => Ok(CurrentActor::Unknown),
        Some(ActorBinding::Anonymous) => Ok(CurrentActor::Anonymous),
        Some(ActorBinding::Identified(id)) => match directory.find_actor(id).await? {
            Some(actor) => Ok(CurrentActor::Resolved(actor)),
            None => Ok(CurrentActor::Unknown),
        },
    }
}
