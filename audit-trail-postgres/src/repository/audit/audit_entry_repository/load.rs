use audit_trail_db::models::audit::AuditEntryModel;
use sqlx::PgPool;
use uuid::Uuid;

use crate::utils::TryFromRow;

pub(super) async fn load_impl(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<AuditEntryModel>, Box<dyn std::error::Error + Send + Sync>> {
    let row = sqlx::query(
        r#"
        SELECT id, changed_at, changed_by, model, model_pk, field, old_value, new_value
        FROM audit_entry
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(|row| AuditEntryModel::try_from_row(&row)).transpose()
}
