//! Job Application Repository

use super::{RepoError, RepoResult};
use shared::models::{Application, ApplicationCreate};
use shared::util::now_millis;
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, email, phone, birthdate, branch_key, department, experience_years, message, privacy_policy_accepted, cv_url, submitted_at";

pub async fn find_all(pool: &SqlitePool, branch_key: Option<&str>) -> RepoResult<Vec<Application>> {
    let rows = match branch_key {
        Some(key) => {
            sqlx::query_as::<_, Application>(&format!(
                "SELECT {COLUMNS} FROM application WHERE branch_key = ? ORDER BY submitted_at DESC"
            ))
            .bind(key)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Application>(&format!(
                "SELECT {COLUMNS} FROM application ORDER BY submitted_at DESC"
            ))
            .fetch_all(pool)
            .await?
        }
    };
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Application>> {
    let row = sqlx::query_as::<_, Application>(&format!(
        "SELECT {COLUMNS} FROM application WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: ApplicationCreate) -> RepoResult<Application> {
    let now = now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO application (name, email, phone, birthdate, branch_key, department, experience_years, message, privacy_policy_accepted, cv_url, submitted_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(&data.birthdate)
    .bind(&data.branch_key)
    .bind(&data.department)
    .bind(data.experience_years)
    .bind(&data.message)
    .bind(data.privacy_policy_accepted)
    .bind(&data.cv_url)
    .bind(now)
    .fetch_one(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create application".into()))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM application WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
