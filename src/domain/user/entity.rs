//! User record entity

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A user record as submitted for registration and as persisted.
///
/// Every field is optional at construction time. Presence, format and range
/// rules are enforced by the registration pipeline, never by this type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    /// Storage identifier, assigned by the repository when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub first_names: Option<String>,
    pub last_names: Option<String>,
    /// Birth date as submitted; not interpreted by the pipeline
    pub birth_date: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// Read from JSON numbers without passing through `f64`
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub base_salary: Option<Decimal>,
}

impl UserRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_first_names(mut self, first_names: impl Into<String>) -> Self {
        self.first_names = Some(first_names.into());
        self
    }

    pub fn with_last_names(mut self, last_names: impl Into<String>) -> Self {
        self.last_names = Some(last_names.into());
        self
    }

    pub fn with_birth_date(mut self, birth_date: impl Into<String>) -> Self {
        self.birth_date = Some(birth_date.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_base_salary(mut self, base_salary: Decimal) -> Self {
        self.base_salary = Some(base_salary);
        self
    }

    /// Return a copy with whitespace trimmed from the text fields and the
    /// email trimmed and upper-cased. Absent fields stay absent.
    pub fn normalized(&self) -> Self {
        Self {
            id: self.id.clone(),
            first_names: trimmed(&self.first_names),
            last_names: trimmed(&self.last_names),
            birth_date: self.birth_date.clone(),
            address: trimmed(&self.address),
            phone: trimmed(&self.phone),
            email: self.email.as_deref().map(|e| e.trim().to_uppercase()),
            base_salary: self.base_salary,
        }
    }
}

fn trimmed(value: &Option<String>) -> Option<String> {
    value.as_deref().map(|v| v.trim().to_string())
}
