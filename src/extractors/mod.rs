//! Request extractors: validated inputs, database sessions, and record lookups.

pub mod product;
pub mod session;
pub mod valid;

pub use product::ProductById;
pub use session::{session_scope, DbSession, ScopedDbSession};
pub use valid::{ValidJson, ValidPath, ValidQuery};
