use audit_trail_db::models::audit::ActorModel;
use sqlx::PgPool;
use uuid::Uuid;

use crate::utils::TryFromRow;

pub(super) async fn find_actor_impl(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<ActorModel>, Box<dyn std::error::Error + Send + Sync>> {
    let row = sqlx::query(
        r#"
        SELECT id, username, full_name
        FROM actor
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(|row| ActorModel::try_from_row(&row)).transpose()
}

#[cfg(test)]
#[serial_test::serial]
mod tests {
    use crate::test_helper::setup_test_context;
    use audit_trail_db::models::audit::ActorModel;
    use audit_trail_db::repository::actor_directory::ActorDirectory;
    use uuid::Uuid;

    fn new_test_actor() -> ActorModel {
        ActorModel {
            id: Uuid::new_v4(),
            username: heapless::String::try_from(Uuid::new_v4().to_string().as_str()).unwrap(),
            full_name: Some(heapless::String::try_from("Testy Mike").unwrap()),
        }
    }

    #[tokio::test]
    #[ignore] // requires a running PostgreSQL (DATABASE_URL)
    async fn test_create_and_resolve_actor() -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    {
        let ctx = setup_test_context().await?;
        let directory = &ctx.audit_repos.actor_directory;

        let actor = new_test_actor();
        directory.create(&actor).await?;

        let resolved = directory.find_actor(actor.id).await?.expect("actor should exist");
        assert_eq!(resolved.id, actor.id);
        assert_eq!(resolved.username, actor.username);

        let missing = directory.find_actor(Uuid::new_v4()).await?;
        assert!(missing.is_none());

        Ok(())
    }
}
