//! Contact Message Repository

use super::{RepoError, RepoResult};
use shared::models::{ContactMessage, ContactMessageCreate};
use shared::util::now_millis;
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, email, phone, subject, message, branch_key, received_at";

pub async fn find_all(
    pool: &SqlitePool,
    branch_key: Option<&str>,
) -> RepoResult<Vec<ContactMessage>> {
    let rows = match branch_key {
        Some(key) => {
            sqlx::query_as::<_, ContactMessage>(&format!(
                "SELECT {COLUMNS} FROM contact_message WHERE branch_key = ? ORDER BY received_at DESC"
            ))
            .bind(key)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, ContactMessage>(&format!(
                "SELECT {COLUMNS} FROM contact_message ORDER BY received_at DESC"
            ))
            .fetch_all(pool)
            .await?
        }
    };
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<ContactMessage>> {
    let row = sqlx::query_as::<_, ContactMessage>(&format!(
        "SELECT {COLUMNS} FROM contact_message WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: ContactMessageCreate) -> RepoResult<ContactMessage> {
    let now = now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO contact_message (name, email, phone, subject, message, branch_key, received_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(&data.subject)
    .bind(&data.message)
    .bind(&data.branch_key)
    .bind(now)
    .fetch_one(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create message".into()))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM contact_message WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
