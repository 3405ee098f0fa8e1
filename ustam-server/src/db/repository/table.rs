//! Managed Table Repository

use std::collections::HashMap;

use super::{RepoError, RepoResult};
use shared::models::ManagedTable;
use sqlx::SqlitePool;
use sqlx::types::Json;

const COLUMNS: &str =
    "id, branch_id, table_number, link, override_main_qr_link, overridden_links";

pub async fn find_by_branch(pool: &SqlitePool, branch_id: i64) -> RepoResult<Vec<ManagedTable>> {
    let tables = sqlx::query_as::<_, ManagedTable>(&format!(
        "SELECT {COLUMNS} FROM managed_table WHERE branch_id = ? ORDER BY table_number"
    ))
    .bind(branch_id)
    .fetch_all(pool)
    .await?;
    Ok(tables)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<ManagedTable>> {
    let table = sqlx::query_as::<_, ManagedTable>(&format!(
        "SELECT {COLUMNS} FROM managed_table WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(table)
}

pub async fn find_by_number(
    pool: &SqlitePool,
    branch_id: i64,
    table_number: i64,
) -> RepoResult<Option<ManagedTable>> {
    let table = sqlx::query_as::<_, ManagedTable>(&format!(
        "SELECT {COLUMNS} FROM managed_table WHERE branch_id = ? AND table_number = ? LIMIT 1"
    ))
    .bind(branch_id)
    .bind(table_number)
    .fetch_optional(pool)
    .await?;
    Ok(table)
}

/// Insert a contiguous batch of tables, all-or-nothing.
///
/// `rows` pairs each table number with its canonical link. If any number
/// already exists in the branch the whole batch is rejected and no rows
/// are written.
pub async fn bulk_create(
    pool: &SqlitePool,
    branch_id: i64,
    rows: &[(i64, String)],
) -> RepoResult<Vec<ManagedTable>> {
    let mut tx = pool.begin().await?;

    // Pre-check inside the transaction so the conflict report is complete
    let existing = sqlx::query_scalar::<_, i64>(
        "SELECT table_number FROM managed_table WHERE branch_id = ? ORDER BY table_number",
    )
    .bind(branch_id)
    .fetch_all(&mut *tx)
    .await?;

    let conflicts: Vec<i64> = rows
        .iter()
        .map(|(n, _)| *n)
        .filter(|n| existing.contains(n))
        .collect();
    if !conflicts.is_empty() {
        return Err(RepoError::Duplicate(format!(
            "Table numbers already exist: {conflicts:?}"
        )));
    }

    let mut ids = Vec::with_capacity(rows.len());
    for (number, link) in rows {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO managed_table (branch_id, table_number, link, overridden_links) \
             VALUES (?, ?, ?, '{}') RETURNING id",
        )
        .bind(branch_id)
        .bind(number)
        .bind(link)
        .fetch_one(&mut *tx)
        .await?;
        ids.push(id);
    }

    tx.commit().await?;

    let mut created = Vec::with_capacity(ids.len());
    for id in ids {
        created.push(
            find_by_id(pool, id)
                .await?
                .ok_or_else(|| RepoError::Database("Failed to read created table".into()))?,
        );
    }
    Ok(created)
}

/// Persist the override fields. The caller merges the update payload into
/// the current row first; `table_number` and `link` stay untouched.
pub async fn save_overrides(
    pool: &SqlitePool,
    id: i64,
    override_main_qr_link: Option<&str>,
    overridden_links: &HashMap<String, String>,
) -> RepoResult<ManagedTable> {
    let rows = sqlx::query(
        "UPDATE managed_table SET override_main_qr_link = ?, overridden_links = ? WHERE id = ?",
    )
    .bind(override_main_qr_link)
    .bind(Json(overridden_links))
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Table {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Table {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM managed_table WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

/// Delete by id, scoped to one branch. Ids from other branches are
/// silently ignored so an operator can never reach across tenants.
pub async fn bulk_delete(pool: &SqlitePool, branch_id: i64, ids: &[i64]) -> RepoResult<u64> {
    if ids.is_empty() {
        return Ok(0);
    }
    let placeholders = vec!["?"; ids.len()].join(", ");
    let sql = format!(
        "DELETE FROM managed_table WHERE branch_id = ? AND id IN ({placeholders})"
    );
    let mut query = sqlx::query(&sql).bind(branch_id);
    for id in ids {
        query = query.bind(id);
    }
    let rows = query.execute(pool).await?;
    Ok(rows.rows_affected())
}
