//! User registration domain
//!
//! This module provides the user record entity, its validation rules, the
//! repository trait the registration pipeline depends on, and the pipeline
//! itself.

mod entity;
mod observer;
mod registration;
mod repository;
mod validation;

pub use entity::UserRecord;
pub use observer::{NoopRegistrationObserver, RegistrationObserver, UNKNOWN_EMAIL};
pub use registration::{register, validate_candidate, RegistrationError};
pub use repository::UserRecordRepository;
pub use validation::{
    is_blank, validate_base_salary, validate_email, validate_required_fields, RequiredField,
    UserValidationError, MAX_BASE_SALARY, MIN_BASE_SALARY,
};

#[cfg(test)]
pub use repository::MockUserRecordRepository;
