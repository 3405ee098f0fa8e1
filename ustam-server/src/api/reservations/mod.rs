//! Reservation API module
//!
//! Public submission plus the authenticated inbox for operators.

mod handler;

use axum::{Router, routing::get, routing::put};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reservations", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        // POST is public (exempted in the auth middleware), GET is not
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}/status", put(handler::set_status))
        .route("/{id}", axum::routing::delete(handler::delete))
}
