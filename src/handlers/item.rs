//! Demo item handlers: a static list and a bounds-checked path parameter.

use crate::error::AppError;
use crate::extractors::{ValidPath, ValidQuery};
use crate::model::{ItemOut, ItemQuery};
use crate::service::validate_range;
use axum::Json;

pub const ITEM_ID_MIN: i64 = 1;
pub const ITEM_ID_MAX_EXCLUSIVE: i64 = 100;

pub async fn list() -> Json<Vec<&'static str>> {
    Json(vec!["item1", "item2", "item3"])
}

pub async fn read(
    ValidPath(item_id): ValidPath<i64>,
    ValidQuery(query): ValidQuery<ItemQuery>,
) -> Result<Json<ItemOut>, AppError> {
    validate_range("item_id", item_id, ITEM_ID_MIN, ITEM_ID_MAX_EXCLUSIVE)?;
    Ok(Json(ItemOut { item_id, q: query.q }))
}
