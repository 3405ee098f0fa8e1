//! Operator API Handlers

use axum::{
    Json,
    extract::{Extension, Path, State},
};

use crate::auth::{CurrentUser, password};
use crate::core::ServerState;
use crate::db::repository::{RepoError, branch, operator};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{Operator, OperatorCreate, OperatorUpdate};

const MIN_PASSWORD_LEN: usize = 8;

async fn check_branch_exists(state: &ServerState, branch_id: Option<i64>) -> AppResult<()> {
    if let Some(id) = branch_id {
        branch::find_by_id(&state.pool, id)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| AppError::new(ErrorCode::BranchNotFound).with_detail("id", id))?;
    }
    Ok(())
}

/// GET /api/operators
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Operator>>> {
    let operators = operator::find_all(&state.pool).await.map_err(AppError::from)?;
    Ok(Json(operators))
}

/// GET /api/operators/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Operator>> {
    let found = operator::find_by_id(&state.pool, id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::not_found(format!("Operator {id}")))?;
    Ok(Json(found))
}

/// POST /api/operators
pub async fn create(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<OperatorCreate>,
) -> AppResult<Json<Operator>> {
    if payload.username.trim().is_empty() {
        return Err(AppError::validation("Username must not be empty"));
    }
    if payload.password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    check_branch_exists(&state, payload.branch_id).await?;

    let hashed = password::hash_password(&payload.password)
        .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?;

    let created = match operator::create_with_hash(&state.pool, payload, hashed).await {
        Ok(op) => op,
        Err(RepoError::Duplicate(_)) => {
            return Err(AppError::conflict("Username or email already in use"));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(
        operator_id = created.id,
        username = %created.username,
        created_by = %current_user.username,
        "Operator account created"
    );
    Ok(Json(created))
}

/// PUT /api/operators/:id
pub async fn update(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<OperatorUpdate>,
) -> AppResult<Json<Operator>> {
    // A superuser locking themselves out is unrecoverable without SQL
    if id == current_user.id
        && (payload.is_active == Some(false) || payload.is_superuser == Some(false))
    {
        return Err(AppError::forbidden(
            "Cannot deactivate or demote your own account",
        ));
    }

    if let Some(new_branch) = payload.branch_id {
        check_branch_exists(&state, new_branch).await?;
    }

    let hashed = match payload.password.as_deref() {
        Some(pw) => {
            if pw.len() < MIN_PASSWORD_LEN {
                return Err(AppError::validation(format!(
                    "Password must be at least {MIN_PASSWORD_LEN} characters"
                )));
            }
            Some(
                password::hash_password(pw)
                    .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?,
            )
        }
        None => None,
    };

    let updated = match operator::update(&state.pool, id, payload, hashed).await {
        Ok(op) => op,
        Err(RepoError::Duplicate(_)) => {
            return Err(AppError::conflict("Email already in use"));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(
        operator_id = id,
        updated_by = %current_user.username,
        "Operator account updated"
    );
    Ok(Json(updated))
}

/// DELETE /api/operators/:id
pub async fn delete(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    if id == current_user.id {
        return Err(AppError::forbidden("Cannot delete your own account"));
    }

    let deleted = operator::delete(&state.pool, id).await.map_err(AppError::from)?;
    if !deleted {
        return Err(AppError::not_found(format!("Operator {id}")));
    }

    tracing::info!(
        operator_id = id,
        deleted_by = %current_user.username,
        "Operator account deleted"
    );
    Ok(Json(true))
}
