//! User record validation utilities

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

use super::entity::UserRecord;

/// Lowest accepted base salary (inclusive)
pub const MIN_BASE_SALARY: Decimal = Decimal::ZERO;

/// Highest accepted base salary (inclusive)
pub const MAX_BASE_SALARY: Decimal = Decimal::from_parts(15_000_000, 0, 0, false, 0);

/// Letters, digits and `+_.-` before the `@`; letters, digits and `.-` after it
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+$").unwrap());

/// Fields the pipeline requires, in the order they are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    FirstNames,
    LastNames,
    Email,
    BaseSalary,
}

impl RequiredField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstNames => "first_names",
            Self::LastNames => "last_names",
            Self::Email => "email",
            Self::BaseSalary => "base_salary",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur during user record validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("user record is required")]
    MissingRecord,

    #[error("field '{0}' is required")]
    MissingField(RequiredField),

    #[error("'email' does not have a valid format")]
    InvalidEmailFormat,

    #[error("'base_salary' must be between {min} and {max}")]
    BaseSalaryOutOfRange { min: Decimal, max: Decimal },
}

/// Absent or whitespace-only
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Check required fields in their fixed order and report the first missing one
pub fn validate_required_fields(record: &UserRecord) -> Result<(), UserValidationError> {
    if is_blank(record.first_names.as_deref()) {
        return Err(UserValidationError::MissingField(RequiredField::FirstNames));
    }

    if is_blank(record.last_names.as_deref()) {
        return Err(UserValidationError::MissingField(RequiredField::LastNames));
    }

    if is_blank(record.email.as_deref()) {
        return Err(UserValidationError::MissingField(RequiredField::Email));
    }

    if record.base_salary.is_none() {
        return Err(UserValidationError::MissingField(RequiredField::BaseSalary));
    }

    Ok(())
}

/// Validate an email address against the accepted pattern
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if !EMAIL_PATTERN.is_match(email) {
        return Err(UserValidationError::InvalidEmailFormat);
    }

    Ok(())
}

/// Validate that a base salary lies within the inclusive accepted range
pub fn validate_base_salary(base_salary: Decimal) -> Result<(), UserValidationError> {
    if base_salary < MIN_BASE_SALARY || base_salary > MAX_BASE_SALARY {
        return Err(UserValidationError::BaseSalaryOutOfRange {
            min: MIN_BASE_SALARY,
            max: MAX_BASE_SALARY,
        });
    }

    Ok(())
}
