use audit_trail_db::models::audit::AuditEntryModel;
use sqlx::PgPool;

pub(super) async fn append_impl(
    pool: &PgPool,
    entry: &AuditEntryModel,
) -> Result<AuditEntryModel, Box<dyn std::error::Error + Send + Sync>> {
    sqlx::query(
        r#"
        INSERT INTO audit_entry (id, changed_at, changed_by, model, model_pk, field, old_value, new_value)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(entry.id)
    .bind(entry.changed_at)
    .bind(entry.changed_by)
    .bind(entry.model.as_str())
    .bind(entry.model_pk.as_str())
    .bind(entry.field.as_str())
    .bind(entry.old_value.as_deref())
    .bind(entry.new_value.as_deref())
    .execute(pool)
    .await?;

    Ok(entry.clone())
}
