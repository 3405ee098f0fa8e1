//! Branch scope checks
//!
//! A regular operator is pinned to exactly one branch; a superuser may
//! act on any branch but must say which one. These helpers are called at
//! the top of every branch-scoped handler.

use crate::auth::CurrentUser;
use crate::utils::{AppError, AppResult, ErrorCode};

/// Can `user` touch `branch_id`?
///
/// Superusers always pass. Regular operators pass only for their own
/// branch; an unassigned operator fails with NoBranchAssigned.
pub fn require_branch_access(user: &CurrentUser, branch_id: i64) -> AppResult<()> {
    if user.is_superuser {
        return Ok(());
    }
    match user.branch_id {
        Some(own) if own == branch_id => Ok(()),
        Some(_) => Err(AppError::new(ErrorCode::PermissionDenied)
            .with_detail("branch_id", branch_id)),
        None => Err(AppError::new(ErrorCode::NoBranchAssigned)),
    }
}

/// Resolve which branch a branch-scoped operation targets.
///
/// Regular operators always act on their own branch; passing a different
/// `?branch_id=` is rejected. Superusers have no implicit branch and must
/// pass `?branch_id=` explicitly.
pub fn scoped_branch_id(user: &CurrentUser, requested: Option<i64>) -> AppResult<i64> {
    if user.is_superuser {
        return requested.ok_or_else(|| {
            AppError::validation("Superuser requests must specify branch_id")
        });
    }

    let own = user
        .branch_id
        .ok_or_else(|| AppError::new(ErrorCode::NoBranchAssigned))?;

    match requested {
        Some(other) if other != own => Err(AppError::new(ErrorCode::PermissionDenied)
            .with_detail("branch_id", other)),
        _ => Ok(own),
    }
}

/// Which branch key (slug) the operator's form-inbox queries are pinned
/// to. `None` means unrestricted (superuser).
pub async fn scoped_branch_key(
    pool: &sqlx::SqlitePool,
    user: &CurrentUser,
) -> AppResult<Option<String>> {
    if user.is_superuser {
        return Ok(None);
    }
    let branch_id = user
        .branch_id
        .ok_or_else(|| AppError::new(ErrorCode::NoBranchAssigned))?;
    let branch = crate::db::repository::branch::find_by_id(pool, branch_id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::new(ErrorCode::BranchNotFound).with_detail("id", branch_id))?;
    Ok(Some(branch.slug))
}
