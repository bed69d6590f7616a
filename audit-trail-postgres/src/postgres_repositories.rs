use sqlx::PgPool;
use std::sync::Arc;

use crate::repository::audit::actor_directory::PgActorDirectory;
use crate::repository::audit::audit_entry_repository::AuditEntryRepositoryImpl;

/// Entry point binding the audit repositories to one connection pool.
///
/// Every repository write is an independent statement on the pool; the audit
/// trail assumes no transaction spanning multiple entries.
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Build the audit repositories sharing this pool
    pub fn audit_repositories(&self) -> AuditRepositories {
        AuditRepositories {
            entry_repository: Arc::new(AuditEntryRepositoryImpl::new((*self.pool).clone())),
            actor_directory: Arc::new(PgActorDirectory::new((*self.pool).clone())),
        }
    }
}

/// Container for the audit module repositories
pub struct AuditRepositories {
    pub entry_repository: Arc<AuditEntryRepositoryImpl>,
    pub actor_directory: Arc<PgActorDirectory>,
}
