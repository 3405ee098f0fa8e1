//! Operator Repository

use super::{RepoError, RepoResult};
use shared::models::{Operator, OperatorCreate, OperatorUpdate};
use sqlx::SqlitePool;

const COLUMNS: &str =
    "id, username, email, hashed_password, is_active, is_superuser, branch_id";

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM operator")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Operator>> {
    let operators =
        sqlx::query_as::<_, Operator>(&format!("SELECT {COLUMNS} FROM operator ORDER BY username"))
            .fetch_all(pool)
            .await?;
    Ok(operators)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Operator>> {
    let operator =
        sqlx::query_as::<_, Operator>(&format!("SELECT {COLUMNS} FROM operator WHERE id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(operator)
}

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> RepoResult<Option<Operator>> {
    let operator = sqlx::query_as::<_, Operator>(&format!(
        "SELECT {COLUMNS} FROM operator WHERE username = ? LIMIT 1"
    ))
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(operator)
}

/// Insert an operator whose password hash was computed by the caller.
/// `data.password` is ignored here on purpose.
pub async fn create_with_hash(
    pool: &SqlitePool,
    data: OperatorCreate,
    hashed_password: String,
) -> RepoResult<Operator> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO operator (username, email, hashed_password, is_active, is_superuser, branch_id) \
         VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.username)
    .bind(&data.email)
    .bind(&hashed_password)
    .bind(data.is_active)
    .bind(data.is_superuser)
    .bind(data.branch_id)
    .fetch_one(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create operator".into()))
}

/// Partial update. `hashed_password` replaces the stored hash when set;
/// the caller is responsible for hashing `data.password` beforehand.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: OperatorUpdate,
    hashed_password: Option<String>,
) -> RepoResult<Operator> {
    let current = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Operator {id} not found")))?;

    let branch_id = match data.branch_id {
        Some(new_value) => new_value,
        None => current.branch_id,
    };

    let rows = sqlx::query(
        "UPDATE operator SET email = COALESCE(?1, email), hashed_password = COALESCE(?2, hashed_password), \
         is_active = COALESCE(?3, is_active), is_superuser = COALESCE(?4, is_superuser), branch_id = ?5 WHERE id = ?6",
    )
    .bind(&data.email)
    .bind(&hashed_password)
    .bind(data.is_active)
    .bind(data.is_superuser)
    .bind(branch_id)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Operator {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Operator {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM operator WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
