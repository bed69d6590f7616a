use audit_trail_db::models::audit::AuditEntryModel;
use audit_trail_db::repository::pagination::{Page, PageRequest};
use sqlx::PgPool;

use crate::utils::TryFromRow;

pub(super) async fn find_by_record_impl(
    pool: &PgPool,
    model: &str,
    model_pk: &str,
    page: PageRequest,
) -> Result<Page<AuditEntryModel>, Box<dyn std::error::Error + Send + Sync>> {
    let total: i64 = sqlx::query_scalar(
        r#"SELECT COUNT(*) FROM audit_entry WHERE model = $1 AND model_pk = $2"#,
    )
    .bind(model)
    .bind(model_pk)
    .fetch_one(pool)
    .await?;

    let rows = sqlx::query(
        r#"
        SELECT id, changed_at, changed_by, model, model_pk, field, old_value, new_value
        FROM audit_entry
        WHERE model = $1 AND model_pk = $2
        ORDER BY changed_at DESC, id
        LIMIT $3 OFFSET $4
        "#,
    )
    .bind(model)
    .bind(model_pk)
    .bind(page.limit as i64)
    .bind(page.offset as i64)
    .fetch_all(pool)
    .await?;

    let mut items = Vec::with_capacity(rows.len());
    for row in rows {
        items.push(AuditEntryModel::try_from_row(&row)?);
    }

    Ok(Page::new(items, total as usize, page.limit, page.offset))
}
