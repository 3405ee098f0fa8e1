//! Authentication Handlers
//!
//! Handles login, logout, and token management

use std::time::Duration;

use axum::{Extension, Json, extract::State};

use crate::auth::{CurrentUser, password};
use crate::core::ServerState;
use crate::db::repository::operator;
use crate::utils::{ApiResponse, AppError};

// Re-use shared DTOs for API consistency
use shared::client::{LoginRequest, LoginResponse, UserInfo};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// Login handler
///
/// Authenticates operator credentials and returns a JWT token
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let username = req.username.clone();

    let found = operator::find_by_username(&state.pool, &username)
        .await
        .map_err(AppError::from)?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error message so usernames cannot be enumerated
    let operator = match found {
        Some(op) => {
            let password_valid = password::verify_password(&req.password, &op.hashed_password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

            if !password_valid {
                tracing::warn!(username = %username, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }

            if !op.is_active {
                return Err(AppError::new(shared::ErrorCode::AccountDisabled));
            }

            op
        }
        None => {
            tracing::warn!(username = %username, "Login failed - user not found");
            return Err(AppError::invalid_credentials());
        }
    };

    let token = state
        .get_jwt_service()
        .generate_token(&operator)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(
        user_id = operator.id,
        username = %operator.username,
        is_superuser = operator.is_superuser,
        "Operator logged in successfully"
    );

    Ok(Json(LoginResponse {
        token,
        user: UserInfo {
            id: operator.id,
            username: operator.username,
            email: operator.email,
            branch_id: operator.branch_id,
            is_superuser: operator.is_superuser,
            is_active: operator.is_active,
        },
    }))
}

/// GET /api/auth/me - current operator, read fresh from the database
pub async fn me(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
) -> Result<Json<UserInfo>, AppError> {
    let operator = operator::find_by_id(&state.pool, current_user.id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::not_found(format!("Operator {}", current_user.id)))?;

    Ok(Json(UserInfo {
        id: operator.id,
        username: operator.username,
        email: operator.email,
        branch_id: operator.branch_id,
        is_superuser: operator.is_superuser,
        is_active: operator.is_active,
    }))
}

/// POST /api/auth/logout - stateless tokens, nothing to revoke server-side
pub async fn logout(
    Extension(current_user): Extension<CurrentUser>,
) -> Json<ApiResponse<()>> {
    tracing::info!(user_id = current_user.id, username = %current_user.username, "Operator logged out");
    Json(ApiResponse::ok())
}
