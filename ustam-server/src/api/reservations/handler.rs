//! Reservation API Handlers

use axum::{
    Json,
    extract::{Extension, Path, State},
};

use crate::auth::{CurrentUser, scope};
use crate::core::ServerState;
use crate::db::repository::{branch, reservation};
use crate::utils::{AppError, AppResult};
use shared::models::{Reservation, ReservationCreate, ReservationStatusUpdate};

fn validate_submission(data: &ReservationCreate) -> AppResult<()> {
    if data.name.trim().is_empty() {
        return Err(AppError::validation("Name must not be empty"));
    }
    if !data.email.contains('@') {
        return Err(AppError::validation("Invalid email address"));
    }
    if data.guest_count < 1 {
        return Err(AppError::validation("Guest count must be at least 1"));
    }
    if !data.consent {
        return Err(AppError::validation("Consent is required"));
    }
    Ok(())
}

/// POST /api/reservations - public form submission
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationCreate>,
) -> AppResult<Json<Reservation>> {
    validate_submission(&payload)?;

    // The branch key must name a real branch
    let slugs = branch::list_slugs(&state.pool).await.map_err(AppError::from)?;
    if !slugs.contains(&payload.branch_key) {
        return Err(AppError::validation("Unknown branch")
            .with_detail("branch_key", payload.branch_key.as_str()));
    }

    let created = reservation::create(&state.pool, payload)
        .await
        .map_err(AppError::from)?;

    tracing::info!(
        reservation_id = created.id,
        branch_key = %created.branch_key,
        guest_count = created.guest_count,
        "Reservation received"
    );
    Ok(Json(created))
}

/// GET /api/reservations - inbox, newest first, scoped to the operator's branch
pub async fn list(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<Reservation>>> {
    let branch_key = scope::scoped_branch_key(&state.pool, &current_user).await?;
    let rows = reservation::find_all(&state.pool, branch_key.as_deref())
        .await
        .map_err(AppError::from)?;
    Ok(Json(rows))
}

async fn load_scoped(
    state: &ServerState,
    user: &CurrentUser,
    id: i64,
) -> AppResult<Reservation> {
    let found = reservation::find_by_id(&state.pool, id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::not_found(format!("Reservation {id}")))?;

    if let Some(key) = scope::scoped_branch_key(&state.pool, user).await?
        && found.branch_key != key
    {
        return Err(AppError::forbidden("Reservation belongs to another branch"));
    }
    Ok(found)
}

/// PUT /api/reservations/:id/status
pub async fn set_status(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<ReservationStatusUpdate>,
) -> AppResult<Json<Reservation>> {
    load_scoped(&state, &current_user, id).await?;

    let updated = reservation::set_status(&state.pool, id, payload.status)
        .await
        .map_err(AppError::from)?;

    tracing::info!(
        reservation_id = id,
        status = ?updated.status,
        operator = %current_user.username,
        "Reservation status changed"
    );
    Ok(Json(updated))
}

/// DELETE /api/reservations/:id
pub async fn delete(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    load_scoped(&state, &current_user, id).await?;

    let deleted = reservation::delete(&state.pool, id)
        .await
        .map_err(AppError::from)?;
    Ok(Json(deleted))
}
