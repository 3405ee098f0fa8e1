//! Customer View Handler

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::{branch, table};
use crate::links::resolver;
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::TableViewData;

/// GET /api/musteri/sube/:branch_slug/table/:table_number
///
/// Public endpoint hit by every scanned QR code. Returns the ordered,
/// override-resolved link list plus the effective main QR destination.
pub async fn table_view(
    State(state): State<ServerState>,
    Path((branch_slug, table_number)): Path<(String, i64)>,
) -> AppResult<Json<TableViewData>> {
    if table_number < 1 {
        return Err(AppError::new(ErrorCode::InvalidTableRange)
            .with_detail("table_number", table_number));
    }

    let branch = branch::find_by_slug(&state.pool, &branch_slug)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| {
            AppError::new(ErrorCode::BranchNotFound).with_detail("slug", branch_slug.as_str())
        })?;

    let table = table::find_by_number(&state.pool, branch.id, table_number)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| {
            AppError::new(ErrorCode::TableNotFound).with_detail("table_number", table_number)
        })?;

    Ok(Json(resolver::resolve_view(&branch, &table)))
}
