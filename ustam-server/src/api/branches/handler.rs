//! Branch API Handlers

use axum::{
    Json,
    extract::{Extension, Path, State},
};

use crate::auth::{CurrentUser, scope};
use crate::core::ServerState;
use crate::db::repository::{RepoError, branch};
use crate::links::resolver;
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{Branch, BranchCreate, BranchSave};

/// Slugs end up inside printed QR URLs, so only lowercase ASCII,
/// digits and hyphens are allowed
fn validate_slug(slug: &str) -> AppResult<()> {
    if slug.is_empty()
        || !slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(AppError::validation(
            "Slug must be non-empty lowercase ASCII letters, digits or hyphens",
        )
        .with_detail("slug", slug));
    }
    Ok(())
}

fn validate_links(data_links: &std::collections::HashMap<String, String>, order: &[String]) -> AppResult<()> {
    resolver::validate_link_keys(data_links)?;
    resolver::validate_link_order(order)?;
    Ok(())
}

/// GET /api/branches - all branches for superusers, own branch otherwise
pub async fn list(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<Branch>>> {
    let branches = branch::find_all(&state.pool).await.map_err(AppError::from)?;

    if current_user.is_superuser {
        return Ok(Json(branches));
    }

    let own = current_user
        .branch_id
        .ok_or_else(|| AppError::new(ErrorCode::NoBranchAssigned))?;
    Ok(Json(branches.into_iter().filter(|b| b.id == own).collect()))
}

/// GET /api/branches/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<Branch>> {
    scope::require_branch_access(&current_user, id)?;

    let branch = branch::find_by_id(&state.pool, id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::new(ErrorCode::BranchNotFound).with_detail("id", id))?;
    Ok(Json(branch))
}

/// POST /api/branches - create a branch (superuser only)
pub async fn create(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(mut payload): Json<BranchCreate>,
) -> AppResult<Json<Branch>> {
    validate_slug(&payload.slug)?;
    validate_links(&payload.default_links, &payload.link_order)?;
    payload.default_links = resolver::normalize_links(&payload.default_links);

    let branch = match branch::create(&state.pool, payload).await {
        Ok(b) => b,
        Err(RepoError::Duplicate(_)) => {
            return Err(AppError::new(ErrorCode::SlugTaken));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(
        branch_id = branch.id,
        slug = %branch.slug,
        operator = %current_user.username,
        "Branch created"
    );
    Ok(Json(branch))
}

/// PUT /api/branches/:id - full-body save of branch settings
pub async fn save(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(mut payload): Json<BranchSave>,
) -> AppResult<Json<Branch>> {
    scope::require_branch_access(&current_user, id)?;
    validate_links(&payload.default_links, &payload.link_order)?;

    // Empty URLs mean "unset this key"; prune them before storing
    payload.default_links = resolver::normalize_links(&payload.default_links);

    let branch = branch::save(&state.pool, id, payload)
        .await
        .map_err(AppError::from)?;

    tracing::info!(
        branch_id = branch.id,
        operator = %current_user.username,
        "Branch settings saved"
    );
    Ok(Json(branch))
}

/// DELETE /api/branches/:id - removes the branch and its tables (superuser only)
pub async fn delete(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let deleted = branch::delete(&state.pool, id).await.map_err(AppError::from)?;
    if !deleted {
        return Err(AppError::new(ErrorCode::BranchNotFound).with_detail("id", id));
    }

    tracing::info!(
        branch_id = id,
        operator = %current_user.username,
        "Branch deleted"
    );
    Ok(Json(true))
}
