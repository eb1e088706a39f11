//! Product CRUD handlers. All of them run on the request's scoped session.

use crate::error::AppError;
use crate::extractors::{ProductById, ScopedDbSession, ValidJson};
use crate::model::{Product, ProductCreate, ProductUpdate, ProductUpdatePartial};
use crate::response::{created, ok};
use crate::service::CrudService;
use axum::{http::StatusCode, response::IntoResponse};

pub async fn list(session: ScopedDbSession) -> Result<impl IntoResponse, AppError> {
    let mut session = session.lock().await;
    let products = CrudService::list::<Product>(&mut session).await?;
    Ok(ok(products))
}

pub async fn create(
    session: ScopedDbSession,
    ValidJson(product_in): ValidJson<ProductCreate>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = session.lock().await;
    let product = CrudService::create::<Product>(&mut session, &product_in).await?;
    tracing::info!(id = product.id, "product created");
    Ok(created(product))
}

pub async fn read(ProductById(product): ProductById) -> Result<impl IntoResponse, AppError> {
    Ok(ok(product))
}

pub async fn update(
    session: ScopedDbSession,
    ProductById(product): ProductById,
    ValidJson(product_update): ValidJson<ProductUpdate>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = session.lock().await;
    let product = CrudService::update(&mut session, product, &product_update).await?;
    Ok(ok(product))
}

pub async fn update_partial(
    session: ScopedDbSession,
    ProductById(product): ProductById,
    ValidJson(product_update): ValidJson<ProductUpdatePartial>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = session.lock().await;
    let product = CrudService::update(&mut session, product, &product_update).await?;
    Ok(ok(product))
}

pub async fn delete(
    session: ScopedDbSession,
    ProductById(product): ProductById,
) -> Result<impl IntoResponse, AppError> {
    let mut session = session.lock().await;
    CrudService::delete(&mut session, &product).await?;
    tracing::info!(id = product.id, "product deleted");
    Ok(StatusCode::NO_CONTENT)
}
