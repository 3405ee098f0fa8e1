//! Link type catalog API
//!
//! Read-only view of the code-defined catalog, used by the admin
//! frontend to render link pickers.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::core::ServerState;
use crate::links::catalog;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/link-types", get(list))
}

#[derive(Debug, Serialize)]
pub struct LinkTypeEntry {
    pub key: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
}

/// GET /api/link-types - full catalog in canonical order
pub async fn list() -> Json<Vec<LinkTypeEntry>> {
    Json(
        catalog::link_types()
            .iter()
            .map(|d| LinkTypeEntry {
                key: d.key,
                label: d.label,
                icon: d.icon,
            })
            .collect(),
    )
}
