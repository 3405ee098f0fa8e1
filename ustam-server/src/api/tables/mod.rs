//! Table API module
//!
//! Bulk provisioning and per-table override management. All routes
//! require authentication; scope checks happen in the handlers because
//! a table's branch is only known after loading the row.

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/tables", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route(
            "/bulk",
            post(handler::bulk_create).delete(handler::bulk_delete),
        )
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{id}/view", get(handler::view_preview))
}
