//! Customer landing page API (public)
//!
//! Resolves everything a scanned QR code needs in one request.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/musteri/sube/{branch_slug}/table/{table_number}",
        get(handler::table_view),
    )
}
