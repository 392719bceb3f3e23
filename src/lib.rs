//! User Registration
//!
//! A validation pipeline that registers user records:
//! - Normalizes names, address, phone and email
//! - Checks required fields, email format and base salary range
//! - Rejects emails that are already registered
//! - Persists through a pluggable repository (in-memory or PostgreSQL)

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{register, DomainError, RegistrationError, UserRecord, UserRecordRepository};
pub use infrastructure::user::UserRegistrationService;
