//! User record repository trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::UserRecord;
use crate::domain::DomainError;

/// Persistence gateway consumed by the registration pipeline
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRecordRepository: Send + Sync {
    /// Check whether a record with this exact email is already persisted
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Persist a record, returning the stored version (which may carry a
    /// generated identifier)
    async fn save(&self, record: UserRecord) -> Result<UserRecord, DomainError>;
}
