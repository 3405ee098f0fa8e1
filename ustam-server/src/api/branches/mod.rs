//! Branch API module
//!
//! Branch settings CRUD. Creation and deletion are superuser-only;
//! reading and saving are available to the branch's own operator.

mod handler;

use axum::{Router, middleware, routing::get, routing::post};

use crate::auth::require_superuser;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/branches", routes())
}

fn routes() -> Router<ServerState> {
    let scoped_routes = Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id).put(handler::save));

    let superuser_routes = Router::new()
        .route("/", post(handler::create))
        .route("/{id}", axum::routing::delete(handler::delete))
        .layer(middleware::from_fn(require_superuser));

    scoped_routes.merge(superuser_routes)
}
