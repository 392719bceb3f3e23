//! User infrastructure module
//!
//! This module provides the repository adapters for user records (in-memory
//! and PostgreSQL), the tracing observer and the registration service.

mod factory;
mod observer;
mod postgres_repository;
mod repository;
mod service;

pub use factory::{create_repository, StorageType};
pub use observer::TracingRegistrationObserver;
pub use postgres_repository::{PostgresConfig, PostgresUserRecordRepository};
pub use repository::InMemoryUserRecordRepository;
pub use service::UserRegistrationService;
