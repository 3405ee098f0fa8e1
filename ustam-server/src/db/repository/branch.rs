//! Branch Repository

use super::{RepoError, RepoResult};
use shared::models::{Branch, BranchCreate, BranchSave};
use sqlx::SqlitePool;
use sqlx::types::Json;

const COLUMNS: &str = "id, name, slug, display_whatsapp_number, default_links, link_order";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Branch>> {
    let branches = sqlx::query_as::<_, Branch>(&format!(
        "SELECT {COLUMNS} FROM branch_setting ORDER BY name"
    ))
    .fetch_all(pool)
    .await?;
    Ok(branches)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Branch>> {
    let branch = sqlx::query_as::<_, Branch>(&format!(
        "SELECT {COLUMNS} FROM branch_setting WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(branch)
}

pub async fn find_by_slug(pool: &SqlitePool, slug: &str) -> RepoResult<Option<Branch>> {
    let branch = sqlx::query_as::<_, Branch>(&format!(
        "SELECT {COLUMNS} FROM branch_setting WHERE slug = ? LIMIT 1"
    ))
    .bind(slug)
    .fetch_optional(pool)
    .await?;
    Ok(branch)
}

/// All known branch slugs, used to validate public form submissions
pub async fn list_slugs(pool: &SqlitePool) -> RepoResult<Vec<String>> {
    let slugs = sqlx::query_scalar::<_, String>("SELECT slug FROM branch_setting ORDER BY slug")
        .fetch_all(pool)
        .await?;
    Ok(slugs)
}

pub async fn create(pool: &SqlitePool, data: BranchCreate) -> RepoResult<Branch> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO branch_setting (name, slug, display_whatsapp_number, default_links, link_order) \
         VALUES (?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.slug)
    .bind(&data.display_whatsapp_number)
    .bind(Json(&data.default_links))
    .bind(Json(&data.link_order))
    .fetch_one(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create branch".into()))
}

/// Full-body save: replaces the default link map and ordering wholesale.
/// The slug is deliberately not touchable here.
pub async fn save(pool: &SqlitePool, id: i64, data: BranchSave) -> RepoResult<Branch> {
    let rows = sqlx::query(
        "UPDATE branch_setting SET name = ?, display_whatsapp_number = ?, default_links = ?, link_order = ? WHERE id = ?",
    )
    .bind(&data.name)
    .bind(&data.display_whatsapp_number)
    .bind(Json(&data.default_links))
    .bind(Json(&data.link_order))
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Branch {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Branch {id} not found")))
}

/// Deletes the branch; its tables go with it (ON DELETE CASCADE)
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM branch_setting WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
