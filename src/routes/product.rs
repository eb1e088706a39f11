use crate::handlers::product::{create, delete, list, read, update, update_partial};
use crate::state::AppState;
use axum::{routing::get, Router};

/// Product CRUD under `/products/`. Paths keep their trailing slash.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products/", get(list).post(create))
        .route(
            "/products/:product_id/",
            get(read).put(update).patch(update_partial).delete(delete),
        )
}
