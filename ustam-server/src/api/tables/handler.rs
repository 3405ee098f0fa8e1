//! Table API Handlers

use axum::{
    Json,
    extract::{Extension, Path, Query, State},
};
use serde::Deserialize;

use crate::auth::{CurrentUser, scope};
use crate::core::ServerState;
use crate::db::repository::{RepoError, branch, table};
use crate::links::resolver;
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{
    BulkDeleteResult, ManagedTable, TableBulkCreate, TableBulkDelete, TableUpdate, TableViewData,
};

/// Largest range accepted by one bulk provisioning call
const MAX_BULK_CREATE: i64 = 500;

#[derive(Debug, Deserialize)]
pub struct BranchQuery {
    branch_id: Option<i64>,
}

/// Load a table the caller is allowed to touch.
///
/// Out-of-scope ids are reported as missing, so table ids of other
/// branches cannot be probed.
async fn load_scoped(
    state: &ServerState,
    current_user: &CurrentUser,
    id: i64,
) -> AppResult<ManagedTable> {
    let found = table::find_by_id(&state.pool, id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::new(ErrorCode::TableNotFound).with_detail("id", id))?;
    if scope::require_branch_access(current_user, found.branch_id).is_err() {
        return Err(AppError::new(ErrorCode::TableNotFound).with_detail("id", id));
    }
    Ok(found)
}

/// GET /api/tables?branch_id= - tables of the scoped branch
pub async fn list(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Query(query): Query<BranchQuery>,
) -> AppResult<Json<Vec<ManagedTable>>> {
    let branch_id = scope::scoped_branch_id(&current_user, query.branch_id)?;
    let tables = table::find_by_branch(&state.pool, branch_id)
        .await
        .map_err(AppError::from)?;
    Ok(Json(tables))
}

/// GET /api/tables/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<ManagedTable>> {
    let found = load_scoped(&state, &current_user, id).await?;
    Ok(Json(found))
}

/// GET /api/tables/:id/view - preview of what the customer page renders
pub async fn view_preview(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<TableViewData>> {
    let found = load_scoped(&state, &current_user, id).await?;

    // A table without its branch row means the store is inconsistent
    let branch = branch::find_by_id(&state.pool, found.branch_id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::DataIntegrity,
                "Branch settings missing for an existing table",
            )
            .with_detail("table_id", id)
            .with_detail("branch_id", found.branch_id)
        })?;

    Ok(Json(resolver::resolve_view(&branch, &found)))
}

/// POST /api/tables/bulk?branch_id= - provision a contiguous number range
///
/// All-or-nothing: if any number in the range already exists the whole
/// request fails with 409 and no tables are created.
pub async fn bulk_create(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Query(query): Query<BranchQuery>,
    Json(payload): Json<TableBulkCreate>,
) -> AppResult<Json<Vec<ManagedTable>>> {
    let branch_id = scope::scoped_branch_id(&current_user, query.branch_id)?;

    if payload.start_number < 1 || payload.end_number < payload.start_number {
        return Err(AppError::new(ErrorCode::InvalidTableRange)
            .with_detail("start_number", payload.start_number)
            .with_detail("end_number", payload.end_number));
    }
    let count = payload.end_number - payload.start_number + 1;
    if count > MAX_BULK_CREATE {
        return Err(AppError::new(ErrorCode::InvalidTableRange)
            .with_detail("max", MAX_BULK_CREATE)
            .with_detail("requested", count));
    }

    let branch = branch::find_by_id(&state.pool, branch_id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::new(ErrorCode::BranchNotFound).with_detail("id", branch_id))?;

    let rows: Vec<(i64, String)> = (payload.start_number..=payload.end_number)
        .map(|n| {
            (
                n,
                resolver::canonical_table_link(&state.config.base_url, &branch.slug, n),
            )
        })
        .collect();

    let created = match table::bulk_create(&state.pool, branch_id, &rows).await {
        Ok(tables) => tables,
        Err(RepoError::Duplicate(msg)) => {
            return Err(AppError::new(ErrorCode::TableNumberConflict)
                .with_detail("conflicts", msg));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(
        branch_id,
        start = payload.start_number,
        end = payload.end_number,
        count = created.len(),
        operator = %current_user.username,
        "Tables provisioned"
    );
    Ok(Json(created))
}

/// PUT /api/tables/:id - update override fields
///
/// `table_number`, `link` and `branch_id` are not part of the payload;
/// unknown fields are rejected at deserialization.
pub async fn update(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<TableUpdate>,
) -> AppResult<Json<ManagedTable>> {
    let current = load_scoped(&state, &current_user, id).await?;

    // An empty string clears the main QR override
    let override_main = match payload.override_main_qr_link {
        Some(ref url) if url.trim().is_empty() => None,
        Some(url) => Some(url.trim().to_string()),
        None => current.override_main_qr_link.clone(),
    };

    let overridden_links = match payload.overridden_links {
        Some(ref links) => {
            resolver::validate_link_keys(links)?;
            resolver::normalize_links(links)
        }
        None => current.overridden_links.clone(),
    };

    let updated = table::save_overrides(
        &state.pool,
        id,
        override_main.as_deref(),
        &overridden_links,
    )
    .await
    .map_err(AppError::from)?;

    tracing::info!(
        table_id = id,
        branch_id = updated.branch_id,
        operator = %current_user.username,
        "Table overrides updated"
    );
    Ok(Json(updated))
}

/// DELETE /api/tables/:id
pub async fn delete(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let current = load_scoped(&state, &current_user, id).await?;

    let deleted = table::delete(&state.pool, id).await.map_err(AppError::from)?;

    tracing::info!(
        table_id = id,
        branch_id = current.branch_id,
        operator = %current_user.username,
        "Table deleted"
    );
    Ok(Json(deleted))
}

/// DELETE /api/tables/bulk?branch_id= - delete by id within the scoped branch
///
/// Ids belonging to other branches are ignored; the response reports how
/// many rows were actually removed.
pub async fn bulk_delete(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Query(query): Query<BranchQuery>,
    Json(payload): Json<TableBulkDelete>,
) -> AppResult<Json<BulkDeleteResult>> {
    let branch_id = scope::scoped_branch_id(&current_user, query.branch_id)?;

    let deleted_count = table::bulk_delete(&state.pool, branch_id, &payload.table_ids)
        .await
        .map_err(AppError::from)?;

    tracing::info!(
        branch_id,
        requested = payload.table_ids.len(),
        deleted = deleted_count,
        operator = %current_user.username,
        "Tables bulk-deleted"
    );
    Ok(Json(BulkDeleteResult { deleted_count }))
}
