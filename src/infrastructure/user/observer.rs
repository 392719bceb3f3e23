//! Tracing-backed registration observer

use tracing::{error, info};

use crate::domain::user::{RegistrationError, RegistrationObserver, UserRecord, UNKNOWN_EMAIL};

/// Emits an info event on success and an error event on failure
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRegistrationObserver;

impl RegistrationObserver for TracingRegistrationObserver {
    fn on_registered(&self, record: &UserRecord) {
        info!(
            email = record.email.as_deref().unwrap_or(UNKNOWN_EMAIL),
            id = record.id.as_deref().unwrap_or_default(),
            "User registered successfully"
        );
    }

    fn on_failed(&self, email: &str, err: &RegistrationError) {
        error!(
            email = %email,
            code = err.code(),
            reason = %err,
            "Error registering user"
        );
    }
}
