//! Registration pipeline
//!
//! Takes a candidate record through presence, normalization, required-field,
//! format, range and uniqueness checks before handing it to the repository.
//! The first failing stage ends the call; nothing is persisted after a failure.

use thiserror::Error;

use super::entity::UserRecord;
use super::repository::UserRecordRepository;
use super::validation::{
    validate_base_salary, validate_email, validate_required_fields, RequiredField,
    UserValidationError,
};
use crate::domain::DomainError;

/// Errors returned by [`register`]
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// Caller-correctable input defect
    #[error("{0}")]
    Validation(#[from] UserValidationError),

    /// A record with the same email is already persisted
    #[error("email is already registered")]
    DuplicateEmail,

    /// Failure reported by the repository, passed through unchanged
    #[error(transparent)]
    Repository(#[from] DomainError),
}

impl RegistrationError {
    /// Stable machine-readable code for this error kind
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::DuplicateEmail => "EMAIL_ALREADY_EXISTS",
            Self::Repository(_) => "REPOSITORY_ERROR",
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_duplicate_email(&self) -> bool {
        matches!(self, Self::DuplicateEmail)
    }
}

/// Run the synchronous checks on a candidate and return the normalized record.
///
/// Covers every stage except the uniqueness probe and persistence.
pub fn validate_candidate(
    candidate: Option<&UserRecord>,
) -> Result<UserRecord, UserValidationError> {
    let record = candidate
        .ok_or(UserValidationError::MissingRecord)?
        .normalized();

    validate_required_fields(&record)?;

    let email = record
        .email
        .as_deref()
        .ok_or(UserValidationError::MissingField(RequiredField::Email))?;
    validate_email(email)?;

    let base_salary = record
        .base_salary
        .ok_or(UserValidationError::MissingField(RequiredField::BaseSalary))?;
    validate_base_salary(base_salary)?;

    Ok(record)
}

/// Validate, check uniqueness of and persist a candidate record.
///
/// `exists_by_email` is always awaited to completion before `save` is issued.
pub async fn register<R>(
    candidate: Option<UserRecord>,
    repository: &R,
) -> Result<UserRecord, RegistrationError>
where
    R: UserRecordRepository + ?Sized,
{
    let record = validate_candidate(candidate.as_ref())?;

    let email = record.email.as_deref().unwrap_or_default();
    if repository.exists_by_email(email).await? {
        return Err(RegistrationError::DuplicateEmail);
    }

    Ok(repository.save(record).await?)
}
