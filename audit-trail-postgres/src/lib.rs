pub mod postgres_repositories;
pub mod repository;
pub mod utils;

pub use postgres_repositories::PostgresRepositories;
pub use repository::audit::actor_directory::PgActorDirectory;
pub use repository::audit::audit_entry_repository::AuditEntryRepositoryImpl;

#[cfg(test)]
pub mod test_helper;
