//! HTTP handlers for products, items, and users.

pub mod item;
pub mod product;
pub mod user;
