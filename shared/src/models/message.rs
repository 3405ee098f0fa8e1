//! Contact Message Model (public form submission)

use serde::{Deserialize, Serialize};

/// A message submitted from the public contact form
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    /// Branch slug selected on the form
    pub branch_key: String,
    /// Unix millis
    pub received_at: i64,
}

/// Public submission payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessageCreate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub branch_key: String,
}
