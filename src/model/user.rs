use crate::error::AppError;
use crate::service::{validate_email, validate_length, Validate};
use serde::{Deserialize, Serialize};

/// Sign-up payload. Validated only; users are not persisted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
}

impl Validate for CreateUser {
    fn validate(&self) -> Result<(), AppError> {
        validate_length("username", &self.username, 3, 15)?;
        validate_email("email", &self.email)
    }
}
