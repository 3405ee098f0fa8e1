//! Reservation Repository

use super::{RepoError, RepoResult};
use shared::models::{Reservation, ReservationCreate, ReservationStatus};
use shared::util::now_millis;
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, email, phone, reservation_date, reservation_time, guest_count, branch_key, message, consent, status, received_at";

/// Newest first; optionally restricted to one branch key
pub async fn find_all(pool: &SqlitePool, branch_key: Option<&str>) -> RepoResult<Vec<Reservation>> {
    let rows = match branch_key {
        Some(key) => {
            sqlx::query_as::<_, Reservation>(&format!(
                "SELECT {COLUMNS} FROM reservation WHERE branch_key = ? ORDER BY received_at DESC"
            ))
            .bind(key)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Reservation>(&format!(
                "SELECT {COLUMNS} FROM reservation ORDER BY received_at DESC"
            ))
            .fetch_all(pool)
            .await?
        }
    };
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Reservation>> {
    let row = sqlx::query_as::<_, Reservation>(&format!(
        "SELECT {COLUMNS} FROM reservation WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: ReservationCreate) -> RepoResult<Reservation> {
    let now = now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO reservation (name, email, phone, reservation_date, reservation_time, guest_count, branch_key, message, consent, status, received_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, 'pending', ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(&data.reservation_date)
    .bind(&data.reservation_time)
    .bind(data.guest_count)
    .bind(&data.branch_key)
    .bind(&data.message)
    .bind(data.consent)
    .bind(now)
    .fetch_one(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create reservation".into()))
}

pub async fn set_status(
    pool: &SqlitePool,
    id: i64,
    status: ReservationStatus,
) -> RepoResult<Reservation> {
    let rows = sqlx::query("UPDATE reservation SET status = ? WHERE id = ?")
        .bind(status)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Reservation {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Reservation {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM reservation WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
