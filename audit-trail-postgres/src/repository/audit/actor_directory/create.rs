use audit_trail_db::models::audit::ActorModel;
use sqlx::PgPool;

pub(super) async fn create_impl(
    pool: &PgPool,
    actor: &ActorModel,
) -> Result<ActorModel, Box<dyn std::error::Error + Send + Sync>> {
    sqlx::query(
        r#"
        INSERT INTO actor (id, username, full_name)
        VALUES ($1, $2, $3)
        "#,
    )
    .bind(actor.id)
    .bind(actor.username.as_str())
    .bind(actor.full_name.as_deref())
    .execute(pool)
    .await?;

    Ok(actor.clone())
}
