//! Route tables and application composition.

pub mod common;
pub mod item;
pub mod product;
pub mod user;

pub use common::common_routes;
pub use item::item_routes;
pub use product::product_routes;
pub use user::user_routes;

use crate::extractors::session_scope;
use crate::state::AppState;
use axum::{middleware, Router};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Every router merged into one application. Each request runs in its own session scope.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes())
        .merge(item_routes())
        .merge(user_routes())
        .merge(product_routes())
        .layer(middleware::from_fn_with_state(state.clone(), session_scope))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
