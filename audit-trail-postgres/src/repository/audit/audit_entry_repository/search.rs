use audit_trail_db::models::audit::AuditEntryModel;
use audit_trail_db::repository::pagination::{Page, PageRequest};
use audit_trail_db::repository::search_entries::EntryFilter;
use sqlx::PgPool;

use crate::utils::TryFromRow;

// Unset criteria are bound as NULL and disabled by the IS NULL arm, so one
// statement serves every filter combination.
const WHERE_CLAUSE: &str = r#"
    ($1::varchar IS NULL OR model = $1)
    AND ($2::varchar IS NULL OR model_pk = $2)
    AND ($3::varchar IS NULL OR field = $3)
    AND ($4::uuid IS NULL OR changed_by = $4)
    AND ($5::timestamptz IS NULL OR changed_at >= $5)
    AND ($6::timestamptz IS NULL OR changed_at < $6)
"#;

pub(super) async fn search_impl(
    pool: &PgPool,
    filter: &EntryFilter,
    page: PageRequest,
) -> Result<Page<AuditEntryModel>, Box<dyn std::error::Error + Send + Sync>> {
    let count_query = format!("SELECT COUNT(*) FROM audit_entry WHERE {WHERE_CLAUSE}");
    let total: i64 = sqlx::query_scalar(&count_query)
        .bind(filter.model.as_deref())
        .bind(filter.model_pk.as_deref())
        .bind(filter.field.as_deref())
        .bind(filter.changed_by)
        .bind(filter.from)
        .bind(filter.until)
        .fetch_one(pool)
        .await?;

    let select_query = format!(
        r#"
        SELECT id, changed_at, changed_by, model, model_pk, field, old_value, new_value
        FROM audit_entry
        WHERE {WHERE_CLAUSE}
        ORDER BY changed_at DESC, id
        LIMIT $7 OFFSET $8
        "#
    );
    let rows = sqlx::query(&select_query)
        .bind(filter.model.as_deref())
        .bind(filter.model_pk.as_deref())
        .bind(filter.field.as_deref())
        .bind(filter.changed_by)
        .bind(filter.from)
        .bind(filter.until)
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
