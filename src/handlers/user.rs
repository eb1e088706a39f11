use crate::extractors::ValidJson;
use crate::model::CreateUser;
use axum::Json;
use serde_json::{json, Value};

/// Validate a sign-up payload and echo it back. Nothing is stored.
pub async fn create(ValidJson(user): ValidJson<CreateUser>) -> Json<Value> {
    Json(json!({
        "success": true,
        "user": user,
    }))
}
