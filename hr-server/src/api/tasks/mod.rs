//! Task API

mod handler;

use axum::{Router, routing::{MethodRouter, get}};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/task", routes())
        .route("/task/", collection())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", collection())
        // GET takes the owning employee's id; PUT/DELETE take the task id
        .route(
            "/{id}",
            get(handler::list_for_employee)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/item/{id}", get(handler::get_by_id))
}

fn collection() -> MethodRouter<ServerState> {
    get(handler::missing_employee_id)
        .post(handler::create)
        .put(handler::missing_id)
        .delete(handler::missing_id)
}
