pub mod crud;
pub mod validation;

pub use crud::CrudService;
pub use validation::*;
