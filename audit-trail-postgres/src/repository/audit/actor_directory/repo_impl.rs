use async_trait::async_trait;
use audit_trail_db::models::audit::ActorModel;
use audit_trail_db::repository::actor_directory::ActorDirectory;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};

/// Postgres-backed actor directory.
///
/// The audit engine only reads from it; `create` exists so hosts can
/// provision actors alongside their user records.
pub struct PgActorDirectory {
    pub(crate) pool: PgPool,
}

impl PgActorDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        actor: &ActorModel,
    ) -> Result<ActorModel, Box<dyn std::error::Error + Send + Sync>> {
        super::create::create_impl(&self.pool, actor).await
    }
}

impl TryFromRow<PgRow> for ActorModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        use sqlx::Row;

        Ok(ActorModel {
            id: row.try_get("id")?,
            username: get_heapless_string(row, "username")?,
            full_name: get_optional_heapless_string(row, "full_name")?,
        })
    }
}

#[async_trait]
impl ActorDirectory for PgActorDirectory {
    async fn find_actor(
        &self,
        id: Uuid,
    ) -> Result<Option<ActorModel>, Box<dyn std::error::Error + Send + Sync>> {
        super::find_actor::find_actor_impl(&self.pool, id).await
    }
}
