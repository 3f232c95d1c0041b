//! Employee API

mod handler;

use axum::{Router, routing::{MethodRouter, get}};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    // nest maps "/" to "/employee" only, so the trailing-slash form is added here
    Router::new()
        .nest("/employee", routes())
        .route("/employee/", collection())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", collection())
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{id}/activities", get(handler::list_activities))
}

fn collection() -> MethodRouter<ServerState> {
    get(handler::list)
        .post(handler::create)
        .put(handler::missing_id)
        .delete(handler::missing_id)
}
