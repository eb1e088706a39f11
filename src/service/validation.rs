//! Field validation for request payloads.

use crate::error::AppError;
use once_cell::sync::Lazy;
use regex::Regex;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));

/// Payload checks beyond what deserialization enforces. Payloads with no extra rules use the default.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Length in characters, inclusive bounds.
pub fn validate_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len < min {
        return Err(AppError::Validation(format!(
            "{} must be at least {} characters",
            field, min
        )));
    }
    if len > max {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}

pub fn validate_email(field: &str, value: &str) -> Result<(), AppError> {
    let local_ok = value
        .split_once('@')
        .map(|(local, _)| !local.starts_with('.') && !local.ends_with('.') && !local.contains(".."))
        .unwrap_or(false);
    if !local_ok || !EMAIL_RE.is_match(value) {
        return Err(AppError::Validation(format!("{} must be a valid email", field)));
    }
    Ok(())
}

/// Integer in `[min, max)`.
pub fn validate_range(field: &str, value: i64, min: i64, max_exclusive: i64) -> Result<(), AppError> {
    if value < min {
        return Err(AppError::Validation(format!(
            "{} must be greater than or equal to {}",
            field, min
        )));
    }
    if value >= max_exclusive {
        return Err(AppError::Validation(format!(
            "{} must be less than {}",
            field, max_exclusive
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CreateUser;

    #[test]
    fn username_length_bounds() {
        assert!(validate_length("username", "abc", 3, 15).is_ok());
        assert!(validate_length("username", "abcdefghijklmno", 3, 15).is_ok());
        assert!(validate_length("username", "ab", 3, 15).is_err());
        assert!(validate_length("username", "abcdefghijklmnop", 3, 15).is_err());
        assert!(validate_length("username", "äöü", 3, 15).is_ok());
    }

    #[test]
    fn email_format() {
        for ok in ["john@example.com", "a.b+tag@mail.example.org"] {
            assert!(validate_email("email", ok).is_ok(), "{}", ok);
        }
        for bad in ["", "john", "john@", "@example.com", "john@example", "jo..hn@example.com", "john doe@example.com"] {
            assert!(validate_email("email", bad).is_err(), "{}", bad);
        }
    }

    #[test]
    fn email_rejection_names_the_field() {
        match validate_email("email", "nobody") {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "email must be a valid email"),
            other => panic!("unexpected: {:?}", other),
        }
        for _ in 0..3 {
            assert!(validate_email("email", "john@example.com").is_ok());
        }
    }

    #[test]
    fn range_is_half_open() {
        assert!(validate_range("item_id", 1, 1, 100).is_ok());
        assert!(validate_range("item_id", 99, 1, 100).is_ok());
        assert!(validate_range("item_id", 0, 1, 100).is_err());
        assert!(validate_range("item_id", 100, 1, 100).is_err());
    }

    #[test]
    fn create_user_rules() {
        let user = CreateUser {
            username: "john".into(),
            email: "john@example.com".into(),
        };
        assert!(user.validate().is_ok());
        let short = CreateUser {
            username: "jo".into(),
            ..user.clone()
        };
        assert!(matches!(short.validate(), Err(AppError::Validation(_))));
        let bad_email = CreateUser {
            email: "not-an-email".into(),
            ..user
        };
        assert!(bad_email.validate().is_err());
    }
}
