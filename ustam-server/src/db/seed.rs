//! First-run seeding
//!
//! Creates the initial superuser when the operator table is empty,
//! so a fresh deployment can be logged into without manual SQL.

use shared::models::OperatorCreate;
use sqlx::SqlitePool;

use crate::auth::password;
use crate::core::Config;
use crate::db::repository::operator;
use crate::utils::AppError;

pub async fn seed_superuser(pool: &SqlitePool, config: &Config) -> Result<(), AppError> {
    let count = operator::count(pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to count operators: {e}")))?;

    if count > 0 {
        return Ok(());
    }

    let Some(password) = config.admin_password.as_deref() else {
        tracing::warn!("No operators exist and ADMIN_PASSWORD is not set, skipping seeding");
        return Ok(());
    };

    if password.len() < 8 {
        return Err(AppError::validation(
            "ADMIN_PASSWORD must be at least 8 characters",
        ));
    }

    let hashed = password::hash_password(password)
        .map_err(|e| AppError::internal(format!("Failed to hash admin password: {e}")))?;

    let created = operator::create_with_hash(
        pool,
        OperatorCreate {
            username: config.admin_username.clone(),
            email: config.admin_email.clone(),
            password: String::new(),
            is_active: true,
            is_superuser: true,
            branch_id: None,
        },
        hashed,
    )
    .await
    .map_err(|e| AppError::database(format!("Failed to seed superuser: {e}")))?;

    tracing::info!(
        username = %created.username,
        "Seeded initial superuser account"
    );
    Ok(())
}
