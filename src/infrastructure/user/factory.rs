//! Repository factory for runtime storage selection

use std::sync::Arc;

use tracing::info;

use crate::config::StorageConfig;
use crate::domain::user::UserRecordRepository;
use crate::domain::DomainError;

use super::postgres_repository::{PostgresConfig, PostgresUserRecordRepository};
use super::repository::InMemoryUserRecordRepository;

/// Supported storage types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory storage (for testing/development)
    InMemory,
    /// PostgreSQL storage
    Postgres,
}

impl StorageType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            _ => None,
        }
    }
}

/// Build the repository selected by the storage configuration.
///
/// The PostgreSQL backend needs `database_url`; its table is created on
/// first use.
pub async fn create_repository(
    config: &StorageConfig,
) -> Result<Arc<dyn UserRecordRepository>, DomainError> {
    let storage_type = StorageType::from_str(&config.backend).ok_or_else(|| {
        DomainError::internal(format!("Unknown storage backend '{}'", config.backend))
    })?;

    info!(backend = ?storage_type, "Creating user record repository");

    match storage_type {
        StorageType::InMemory => Ok(Arc::new(InMemoryUserRecordRepository::new())),
        StorageType::Postgres => {
            let url = config.database_url.as_deref().ok_or_else(|| {
                DomainError::internal("storage.database_url is required for the postgres backend")
            })?;
            let pg_config = PostgresConfig::new(url).with_max_connections(config.max_connections);

            let repository = PostgresUserRecordRepository::connect(&pg_config).await?;
            repository.ensure_schema().await?;

            Ok(Arc::new(repository))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_type_from_str() {
        assert_eq!(StorageType::from_str("memory"), Some(StorageType::InMemory));
        assert_eq!(StorageType::from_str("In-Memory"), Some(StorageType::InMemory));
        assert_eq!(StorageType::from_str("postgres"), Some(StorageType::Postgres));
        assert_eq!(StorageType::from_str("PG"), Some(StorageType::Postgres));
        assert_eq!(StorageType::from_str("redis"), None);
    }

    #[tokio::test]
    async fn test_create_in_memory_repository() {
        let repository = create_repository(&StorageConfig::default()).await.unwrap();
        assert!(!repository.exists_by_email("ANA@X.COM").await.unwrap());
    }

    #[tokio::test]
    async fn test_unknown_backend() {
        let config = StorageConfig {
            backend: "redis".to_string(),
            ..Default::default()
        };

        let result = create_repository(&config).await;
        assert!(matches!(result, Err(DomainError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_postgres_requires_url() {
        let config = StorageConfig {
            backend: "postgres".to_string(),
            database_url: None,
            ..Default::default()
        };

        let result = create_repository(&config).await;
        assert!(matches!(result, Err(DomainError::Internal { .. })));
    }
}
