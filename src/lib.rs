//! Storefront API: products, items, and users over PostgreSQL or SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod session;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{DatabaseBackend, Settings};
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use routes::app;
pub use service::CrudService;
pub use session::{ScopedSession, Session};
pub use state::AppState;
pub use store::DatabaseHelper;
