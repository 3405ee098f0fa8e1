//! Branch Settings Model

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Branch settings entity (one per physical location)
///
/// The branch is the tenant boundary: operators, tables, and link
/// configuration all hang off a branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Branch {
    pub id: i64,
    pub name: String,
    /// URL-safe identifier embedded in printed QR codes. Immutable after
    /// creation: changing it would orphan physical codes.
    pub slug: String,
    pub display_whatsapp_number: Option<String>,
    /// Branch-wide default URL per link type key (JSON column)
    #[cfg_attr(feature = "db", sqlx(json))]
    pub default_links: HashMap<String, String>,
    /// Display order of link type keys (JSON column). Controls both
    /// inclusion and sequence: a key absent here is never shown.
    #[cfg_attr(feature = "db", sqlx(json))]
    pub link_order: Vec<String>,
}

/// Create branch payload (superuser only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchCreate {
    pub name: String,
    pub slug: String,
    pub display_whatsapp_number: Option<String>,
    #[serde(default)]
    pub default_links: HashMap<String, String>,
    #[serde(default)]
    pub link_order: Vec<String>,
}

/// Full-body save payload
///
/// There is no partial patch: callers always submit the complete default
/// link map and the complete ordering. `slug` is not part of the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchSave {
    pub name: String,
    pub display_whatsapp_number: Option<String>,
    pub default_links: HashMap<String, String>,
    pub link_order: Vec<String>,
}
