//! Thread-scoped "current actor" tracking.
//!
//! The host pipeline binds the acting user at the start of each unit of work
//! (request, background job) and must guarantee the binding is released at
//! the end, including on panics. [`ActorScope`] makes the release structural;
//! the free functions remain available for code that manages the lifecycle
//! itself.

use std::cell::Cell;
use std::marker::PhantomData;

use crate::actor::ActorBinding;

/// Reminder appended to every unattributed-change warning.
pub const ACTOR_BINDING_HINT: &str = "Bind the acting user with audit_trail_api::context::bind_actor() \
     or hold an ActorScope for the duration of the unit of work.";

thread_local! {
    // One slot per thread; lifetime is one unit of work on that thread.
    static CURRENT_ACTOR: Cell<Option<ActorBinding>> = const { Cell::new(None) };
}

/// Binds an actor to the current thread for audit attribution.
pub fn bind_actor(binding: ActorBinding) {
    CURRENT_ACTOR.with(|slot| slot.set(Some(binding)));
}

/// Returns the binding for the current thread, `None` if unset.
///
/// Resolution of an [`ActorBinding::Identified`] id to an actor record is the
/// audit engine's concern; a binding whose record no longer exists is treated
/// as unset at that point.
pub fn current_actor() -> Option<ActorBinding> {
    CURRENT_ACTOR.with(|slot| slot.get())
}

/// Clears the binding for the current thread.
///
/// Must run after every unit of work so attribution cannot bleed into
/// unrelated later work scheduled on the same thread.
pub fn clear_actor() {
    CURRENT_ACTOR.with(|slot| slot.set(None));
}

/// RAII guard that binds an actor and restores the previous binding on drop.
///
/// Dropping the guard restores whatever was bound before it, so nested scopes
/// compose and the outermost scope restores the unset state. The drop runs on
/// unwind too, which gives the pipeline its guaranteed-release semantics.
///
/// # Example
/// ```
/// use audit_trail_api::context::{current_actor, ActorScope};
/// use audit_trail_api::actor::ActorBinding;
///
/// {
///     let _scope = ActorScope::bind(ActorBinding::Anonymous);
///     assert_eq!(current_actor(), Some(ActorBinding::Anonymous));
/// }
/// assert_eq!(current_actor(), None);
/// ```
#[must_use = "the binding is released when the scope is dropped"]
pub struct ActorScope {
    previous: Option<ActorBinding>,
    // The slot is thread-local; the guard must drop on the thread it bound.
    _not_send: PhantomData<*const ()>,
}

impl ActorScope {
    /// Binds `binding` on the current thread and returns the release guard.
    pub fn bind(binding: ActorBinding) -> Self {
        let previous = current_actor();
        bind_actor(binding);
        Self {
            previous,
            _not_send: PhantomData,
        }
    }
}

impl Drop for ActorScope {
    fn drop(&mut self) {
        CURRENT_ACTOR.with(|slot| slot.set(self.previous));
    }
}
