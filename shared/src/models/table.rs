//! Managed Table Model

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A physical table registered under a branch
///
/// `table_number` is unique within its branch and is baked into the printed
/// QR code, so it can never be edited after provisioning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ManagedTable {
    pub id: i64,
    pub branch_id: i64,
    pub table_number: i64,
    /// Canonical customer-facing URL for this table's QR code
    pub link: String,
    /// Replaces the canonical link entirely when set (non-empty)
    pub override_main_qr_link: Option<String>,
    /// Per-table URL overrides keyed by link type (JSON column).
    /// Takes precedence over the branch default for the same key.
    #[cfg_attr(feature = "db", sqlx(json))]
    pub overridden_links: HashMap<String, String>,
}

/// Update payload for a table
///
/// `deny_unknown_fields` rejects attempts to edit `table_number`, `link`,
/// or `branch_id` with a validation error instead of silently dropping them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableUpdate {
    /// `Some(...)` sets the field, `None` leaves it untouched.
    /// An empty string clears the override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_main_qr_link: Option<String>,
    /// Full replacement of the override map when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overridden_links: Option<HashMap<String, String>>,
}

/// Bulk provisioning request: creates tables `start_number..=end_number`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableBulkCreate {
    pub start_number: i64,
    pub end_number: i64,
}

/// Bulk deletion request by table id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableBulkDelete {
    pub table_ids: Vec<i64>,
}

/// Result of a bulk deletion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkDeleteResult {
    pub deleted_count: u64,
}
