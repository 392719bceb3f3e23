//! Registration outcome observer

use super::entity::UserRecord;
use super::registration::RegistrationError;

/// Placeholder reported when a failed candidate carried no email
pub const UNKNOWN_EMAIL: &str = "unknown";

/// Receives the outcome of a registration once the pipeline has finished.
///
/// Observers must not alter the outcome; they only see it.
pub trait RegistrationObserver: Send + Sync {
    /// Called with the record returned by the repository
    fn on_registered(&self, record: &UserRecord);

    /// Called with the best-known email of the candidate and the failure
    fn on_failed(&self, email: &str, error: &RegistrationError);
}

/// Observer that ignores every outcome
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRegistrationObserver;

impl RegistrationObserver for NoopRegistrationObserver {
    fn on_registered(&self, _record: &UserRecord) {}

    fn on_failed(&self, _email: &str, _error: &RegistrationError) {}
}
