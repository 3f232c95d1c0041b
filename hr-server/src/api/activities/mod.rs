//! Activity API

mod handler;

use axum::{Router, routing::{MethodRouter, get}};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/activity", routes())
        .route("/activity/", collection())
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
        .route("/{id}/employees", get(handler::list_employees))
}

fn collection() -> MethodRouter<ServerState> {
    get(handler::list)
        .post(handler::create)
        .put(handler::missing_id)
        .delete(handler::missing_id)
}
