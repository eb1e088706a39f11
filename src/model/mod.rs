//! Record definitions and their static table descriptors.

pub mod descriptor;
pub mod item;
pub mod product;
pub mod user;

pub use descriptor::*;
pub use item::*;
pub use product::*;
pub use user::*;
