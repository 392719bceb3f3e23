//! PostgreSQL user record repository implementation

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use uuid::Uuid;

use crate::domain::user::{UserRecord, UserRecordRepository};
use crate::domain::DomainError;

/// PostgreSQL connection configuration
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    /// Database connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost/user_registration".to_string(),
            max_connections: 10,
            connect_timeout_secs: 30,
        }
    }
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    pub fn with_connect_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }
}

/// PostgreSQL implementation of UserRecordRepository.
///
/// Email uniqueness is also enforced by a unique index, so a record that
/// slips past the pipeline's uniqueness probe under concurrency is rejected
/// with a conflict at insert time.
#[derive(Debug, Clone)]
pub struct PostgresUserRecordRepository {
    pool: PgPool,
}

impl PostgresUserRecordRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect a pool using the given configuration
    pub async fn connect(config: &PostgresConfig) -> Result<Self, DomainError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
            .connect(&config.url)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e)))?;

        Ok(Self::new(pool))
    }

    /// Create the user_records table if it does not exist
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS user_records (
                id TEXT PRIMARY KEY,
                first_names TEXT NOT NULL,
                last_names TEXT NOT NULL,
                birth_date TEXT,
                address TEXT,
                phone TEXT,
                email TEXT NOT NULL UNIQUE,
                base_salary NUMERIC NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create user_records table: {}", e)))?;

        Ok(())
    }
}

#[async_trait]
impl UserRecordRepository for PostgresUserRecordRepository {
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM user_records WHERE email = $1)")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to check email: {}", e)))
    }

    async fn save(&self, mut record: UserRecord) -> Result<UserRecord, DomainError> {
        let id = record
            .id
            .get_or_insert_with(|| Uuid::new_v4().to_string())
            .clone();

        sqlx::query(
            r#"
            INSERT INTO user_records (id, first_names, last_names, birth_date, address,
                                      phone, email, base_salary)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(&id)
        .bind(&record.first_names)
        .bind(&record.last_names)
        .bind(&record.birth_date)
        .bind(&record.address)
        .bind(&record.phone)
        .bind(&record.email)
        .bind(record.base_salary)
        .execute(&self.pool)
        .await
        .map_err(|e| insert_error(&e.to_string(), &record))?;

        Ok(record)
    }
}

fn insert_error(message: &str, record: &UserRecord) -> DomainError {
    if !(message.contains("duplicate key") || message.contains("unique constraint")) {
        return DomainError::storage(format!("Failed to save user record: {}", message));
    }

    if message.contains("email") {
        DomainError::conflict(format!(
            "Email '{}' already exists",
            record.email.as_deref().unwrap_or_default()
        ))
    } else {
        DomainError::conflict(format!(
            "User record with ID '{}' already exists",
            record.id.as_deref().unwrap_or_default()
        ))
    }
}
