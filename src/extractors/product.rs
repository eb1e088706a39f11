//! Resolve `{product_id}` to a stored product before the handler runs.
//!
//! The lookup runs on the request's scoped session, the same one the handler gets.

use crate::error::AppError;
use crate::extractors::ValidPath;
use crate::model::Product;
use crate::service::CrudService;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};

#[derive(Clone, Debug)]
pub struct ProductById(pub Product);

#[async_trait]
impl FromRequestParts<AppState> for ProductById {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let ValidPath(product_id) = ValidPath::<i64>::from_request_parts(parts, state).await?;
        let scoped = state.db.scoped_session();
        let mut session = scoped.lock().await;
        let product = CrudService::get::<Product>(&mut session, product_id).await?;
        product
            .map(ProductById)
            .ok_or_else(|| AppError::NotFound(format!("Product {} not found!", product_id)))
    }
}
