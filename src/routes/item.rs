use crate::handlers::item;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/items/", get(item::list))
        .route("/items/:item_id", get(item::read))
}
