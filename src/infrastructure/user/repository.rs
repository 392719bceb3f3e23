//! In-memory user record repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::user::{UserRecord, UserRecordRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserRecordRepository
#[derive(Debug)]
pub struct InMemoryUserRecordRepository {
    records: Arc<RwLock<HashMap<String, UserRecord>>>,
    /// Index for email -> record ID lookup
    email_index: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryUserRecordRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
            email_index: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a repository with initial records.
    ///
    /// Records without an ID are given a generated one.
    pub fn with_records(records: Vec<UserRecord>) -> Self {
        let mut records_map = HashMap::new();
        let mut email_map = HashMap::new();

        for mut record in records {
            let id = record
                .id
                .get_or_insert_with(|| Uuid::new_v4().to_string())
                .clone();

            if let Some(email) = &record.email {
                email_map.insert(email.clone(), id.clone());
            }
            records_map.insert(id, record);
        }

        Self {
            records: Arc::new(RwLock::new(records_map)),
            email_index: Arc::new(RwLock::new(email_map)),
        }
    }

    /// Get a record by its ID
    pub async fn get(&self, id: &str) -> Option<UserRecord> {
        let records = self.records.read().await;
        records.get(id).cloned()
    }

    /// Number of persisted records
    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

impl Default for InMemoryUserRecordRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRecordRepository for InMemoryUserRecordRepository {
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let email_index = self.email_index.read().await;
        Ok(email_index.contains_key(email))
    }

    async fn save(&self, mut record: UserRecord) -> Result<UserRecord, DomainError> {
        let mut records = self.records.write().await;
        let mut email_index = self.email_index.write().await;

        let id = record
            .id
            .get_or_insert_with(|| Uuid::new_v4().to_string())
            .clone();

        if records.contains_key(&id) {
            return Err(DomainError::conflict(format!(
                "User record with ID '{}' already exists",
                id
            )));
        }

        if let Some(email) = &record.email {
            if email_index.contains_key(email) {
                return Err(DomainError::conflict(format!(
                    "Email '{}' already exists",
                    email
                )));
            }

            email_index.insert(email.clone(), id.clone());
        }

        records.insert(id, record.clone());

        Ok(record)
    }
}
