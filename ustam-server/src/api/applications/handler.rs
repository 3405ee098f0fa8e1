//! Job Application API Handlers

use axum::{
    Json,
    extract::{Extension, Path, State},
};

use crate::auth::{CurrentUser, scope};
use crate::core::ServerState;
use crate::db::repository::{application, branch};
use crate::utils::{AppError, AppResult};
use shared::models::{Application, ApplicationCreate};

/// POST /api/applications - public careers form submission
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ApplicationCreate>,
) -> AppResult<Json<Application>> {
    if payload.name.trim().is_empty() {
        return Err(AppError::validation("Name must not be empty"));
    }
    if !payload.email.contains('@') {
        return Err(AppError::validation("Invalid email address"));
    }
    if payload.experience_years < 0 {
        return Err(AppError::validation("Experience years must not be negative"));
    }
    if !payload.privacy_policy_accepted {
        return Err(AppError::validation("Privacy policy must be accepted"));
    }

    let slugs = branch::list_slugs(&state.pool).await.map_err(AppError::from)?;
    if !slugs.contains(&payload.branch_key) {
        return Err(AppError::validation("Unknown branch")
            .with_detail("branch_key", payload.branch_key.as_str()));
    }

    let created = application::create(&state.pool, payload)
        .await
        .map_err(AppError::from)?;

    tracing::info!(
        application_id = created.id,
        branch_key = %created.branch_key,
        department = %created.department,
        "Job application received"
    );
    Ok(Json(created))
}

/// GET /api/applications - inbox, newest first, scoped to the operator's branch
pub async fn list(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<Application>>> {
    let branch_key = scope::scoped_branch_key(&state.pool, &current_user).await?;
    let rows = application::find_all(&state.pool, branch_key.as_deref())
        .await
        .map_err(AppError::from)?;
    Ok(Json(rows))
}

/// DELETE /api/applications/:id
pub async fn delete(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let found = application::find_by_id(&state.pool, id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::not_found(format!("Application {id}")))?;

    if let Some(key) = scope::scoped_branch_key(&state.pool, &current_user).await?
        && found.branch_key != key
    {
        return Err(AppError::forbidden("Application belongs to another branch"));
    }

    let deleted = application::delete(&state.pool, id)
        .await
        .map_err(AppError::from)?;
    Ok(Json(deleted))
}
