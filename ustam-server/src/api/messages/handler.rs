//! Contact Message API Handlers

use axum::{
    Json,
    extract::{Extension, Path, State},
};

use crate::auth::{CurrentUser, scope};
use crate::core::ServerState;
use crate::db::repository::{branch, message};
use crate::utils::{AppError, AppResult};
use shared::models::{ContactMessage, ContactMessageCreate};

/// POST /api/messages - public contact form submission
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ContactMessageCreate>,
) -> AppResult<Json<ContactMessage>> {
    if payload.name.trim().is_empty() {
        return Err(AppError::validation("Name must not be empty"));
    }
    if !payload.email.contains('@') {
        return Err(AppError::validation("Invalid email address"));
    }
    if payload.message.trim().is_empty() {
        return Err(AppError::validation("Message must not be empty"));
    }

    let slugs = branch::list_slugs(&state.pool).await.map_err(AppError::from)?;
    if !slugs.contains(&payload.branch_key) {
        return Err(AppError::validation("Unknown branch")
            .with_detail("branch_key", payload.branch_key.as_str()));
    }

    let created = message::create(&state.pool, payload)
        .await
        .map_err(AppError::from)?;

    tracing::info!(
        message_id = created.id,
        branch_key = %created.branch_key,
        "Contact message received"
    );
    Ok(Json(created))
}

/// GET /api/messages - inbox, newest first, scoped to the operator's branch
pub async fn list(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<ContactMessage>>> {
    let branch_key = scope::scoped_branch_key(&state.pool, &current_user).await?;
    let rows = message::find_all(&state.pool, branch_key.as_deref())
        .await
        .map_err(AppError::from)?;
    Ok(Json(rows))
}

/// DELETE /api/messages/:id
pub async fn delete(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let found = message::find_by_id(&state.pool, id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::not_found(format!("Message {id}")))?;

    if let Some(key) = scope::scoped_branch_key(&state.pool, &current_user).await?
        && found.branch_key != key
    {
        return Err(AppError::forbidden("Message belongs to another branch"));
    }

    let deleted = message::delete(&state.pool, id)
        .await
        .map_err(AppError::from)?;
    Ok(Json(deleted))
}
