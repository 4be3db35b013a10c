//! Gallery API 模块

mod handler;

use axum::{
    Router,
    routing::{delete, get},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/gallery", gallery_routes())
}

fn gallery_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::upload))
        .route("/all", get(handler::list_all))
        .route("/{id}", delete(handler::delete))
}
