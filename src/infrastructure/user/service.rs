//! User registration service

use std::sync::Arc;

use tracing::debug;

use crate::domain::user::{
    register, RegistrationError, RegistrationObserver, UserRecord, UserRecordRepository,
    UNKNOWN_EMAIL,
};

use super::observer::TracingRegistrationObserver;

/// Runs the registration pipeline against a repository and reports each
/// outcome to an observer
pub struct UserRegistrationService<R: UserRecordRepository + ?Sized> {
    repository: Arc<R>,
    observer: Arc<dyn RegistrationObserver>,
}

impl<R: UserRecordRepository + ?Sized> std::fmt::Debug for UserRegistrationService<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRegistrationService").finish_non_exhaustive()
    }
}

impl<R: UserRecordRepository + ?Sized> UserRegistrationService<R> {
    /// Create a new service that logs outcomes through tracing
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_observer(repository, Arc::new(TracingRegistrationObserver))
    }

    /// Create a new service with a custom outcome observer
    pub fn with_observer(repository: Arc<R>, observer: Arc<dyn RegistrationObserver>) -> Self {
        Self {
            repository,
            observer,
        }
    }

    /// Register a candidate record.
    ///
    /// The returned error is exactly the one produced by the pipeline.
    pub async fn register(
        &self,
        candidate: Option<UserRecord>,
    ) -> Result<UserRecord, RegistrationError> {
        let email = best_known_email(candidate.as_ref());
        debug!(email = %email, "Registering user");

        let result = register(candidate, self.repository.as_ref()).await;

        match &result {
            Ok(record) => self.observer.on_registered(record),
            Err(e) => self.observer.on_failed(&email, e),
        }

        result
    }
}

fn best_known_email(candidate: Option<&UserRecord>) -> String {
    candidate
        .and_then(|c| c.email.as_deref())
        .map(|e| e.trim().to_uppercase())
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| UNKNOWN_EMAIL.to_string())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use std::sync::Mutex;

    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::user::{NoopRegistrationObserver, UserValidationError};
    use crate::domain::DomainError;
    use crate::infrastructure::user::repository::InMemoryUserRecordRepository;

    #[derive(Debug, Default)]
    struct RecordingObserver {
        registered: Mutex<Vec<String>>,
        failed: Mutex<Vec<(String, &'static str)>>,
    }

    impl RegistrationObserver for RecordingObserver {
        fn on_registered(&self, record: &UserRecord) {
            self.registered
                .lock()
                .unwrap()
                .push(record.email.clone().unwrap_or_default());
        }

        fn on_failed(&self, email: &str, error: &RegistrationError) {
            self.failed
                .lock()
                .unwrap()
                .push((email.to_string(), error.code()));
        }
    }

    fn create_service() -> (
        UserRegistrationService<InMemoryUserRecordRepository>,
        Arc<InMemoryUserRecordRepository>,
        Arc<RecordingObserver>,
    ) {
        let repository = Arc::new(InMemoryUserRecordRepository::new());
        let observer = Arc::new(RecordingObserver::default());
        let service = UserRegistrationService::with_observer(repository.clone(), observer.clone());
        (service, repository, observer)
    }

    fn make_candidate(email: &str) -> UserRecord {
        UserRecord::new()
            .with_first_names(" Ana ")
            .with_last_names("Ruiz")
            .with_address(" Calle 1 ")
            .with_email(email)
            .with_base_salary(Decimal::from(1_000_000))
    }

    #[tokio::test]
    async fn test_register_persists_normalized_record() {
        let (service, repository, observer) = create_service();

        let saved = service
            .register(Some(make_candidate(" ana@x.com ")))
            .await
            .unwrap();

        assert_eq!(saved.first_names.as_deref(), Some("Ana"));
        assert_eq!(saved.last_names.as_deref(), Some("Ruiz"));
        assert_eq!(saved.address.as_deref(), Some("Calle 1"));
        assert_eq!(saved.email.as_deref(), Some("ANA@X.COM"));
        assert_eq!(saved.base_salary, Some(Decimal::from(1_000_000)));

        let id = saved.id.clone().unwrap();
        assert_eq!(repository.get(&id).await, Some(saved));
        assert_eq!(*observer.registered.lock().unwrap(), vec!["ANA@X.COM"]);
        assert!(observer.failed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_register_duplicate_email_differing_in_case() {
        let (service, repository, observer) = create_service();

        service
            .register(Some(make_candidate("ana@x.com")))
            .await
            .unwrap();
        let err = service
            .register(Some(make_candidate(" ANA@x.COM")))
            .await
            .unwrap_err();

        assert!(err.is_duplicate_email());
        assert_eq!(repository.count().await, 1);
        assert_eq!(
            *observer.failed.lock().unwrap(),
            vec![("ANA@X.COM".to_string(), "EMAIL_ALREADY_EXISTS")]
        );
    }

    #[tokio::test]
    async fn test_register_absent_candidate_reports_placeholder() {
        let (service, repository, observer) = create_service();

        let err = service.register(None).await.unwrap_err();

        assert!(matches!(
            err,
            RegistrationError::Validation(UserValidationError::MissingRecord)
        ));
        assert_eq!(repository.count().await, 0);
        assert_eq!(
            *observer.failed.lock().unwrap(),
            vec![(UNKNOWN_EMAIL.to_string(), "VALIDATION_ERROR")]
        );
    }

    #[tokio::test]
    async fn test_register_salary_out_of_range() {
        let (service, repository, _) = create_service();
        let candidate =
            make_candidate("ana@x.com").with_base_salary(Decimal::from_str("-0.01").unwrap());

        let err = service.register(Some(candidate)).await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(repository.count().await, 0);
    }

    #[tokio::test]
    async fn test_register_with_noop_observer() {
        let repository = Arc::new(InMemoryUserRecordRepository::new());
        let service =
            UserRegistrationService::with_observer(repository.clone(), Arc::new(NoopRegistrationObserver));

        service
            .register(Some(make_candidate("luis@x.com")))
            .await
            .unwrap();

        assert_eq!(repository.count().await, 1);
    }

    #[tokio::test]
    async fn test_register_through_trait_object() {
        let repository: Arc<dyn UserRecordRepository> =
            Arc::new(InMemoryUserRecordRepository::new());
        let service = UserRegistrationService::new(repository.clone());

        service
            .register(Some(make_candidate("ana@x.com")))
            .await
            .unwrap();

        assert!(repository.exists_by_email("ANA@X.COM").await.unwrap());
    }

    #[tokio::test]
    async fn test_register_repository_error_is_unchanged() {
        let mut repository = crate::domain::user::MockUserRecordRepository::new();
        repository.expect_exists_by_email().returning(|_| Ok(false));
        repository
            .expect_save()
            .returning(|_| Err(DomainError::internal("disk full")));
        let service = UserRegistrationService::new(Arc::new(repository));

        let err = service
            .register(Some(make_candidate("ana@x.com")))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Internal error: disk full");
    }

    #[test]
    fn test_best_known_email() {
        assert_eq!(best_known_email(None), UNKNOWN_EMAIL);
        assert_eq!(best_known_email(Some(&UserRecord::new())), UNKNOWN_EMAIL);
        assert_eq!(
            best_known_email(Some(&UserRecord::new().with_email("  "))),
            UNKNOWN_EMAIL
        );
        assert_eq!(
            best_known_email(Some(&UserRecord::new().with_email(" ana@x.com"))),
            "ANA@X.COM"
        );
    }
}
