//! Shared application state for all routes.

use crate::store::DatabaseHelper;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseHelper,
}

impl AppState {
    pub fn new(db: DatabaseHelper) -> Self {
        AppState { db }
    }
}
