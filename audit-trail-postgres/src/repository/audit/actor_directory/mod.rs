pub mod repo_impl;

mod create;
mod find_actor;

pub use repo_impl::PgActorDirectory;
