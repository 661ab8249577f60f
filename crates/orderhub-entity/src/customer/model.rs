//! Customer entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Prefix of generated customer numbers.
pub const CUSTOMER_NUMBER_PREFIX: &str = "CUST-";

/// Placeholder names written over anonymized customers.
const ANONYMIZED_FIRST_NAME: &str = "Anonymized";
const ANONYMIZED_LAST_NAME: &str = "Customer";

/// A customer row. Deleting a customer only flips `is_deleted`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Customer {
    /// Unique customer identifier.
    pub id: Uuid,
    /// Human-facing unique number, e.g. `CUST-1A2B3C4D5E6F`.
    pub customer_number: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Unique email address.
    pub email: String,
    /// Contact phone number.
    pub phone: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    /// Soft-delete flag.
    pub is_deleted: bool,
    /// When the customer was soft-deleted.
    pub deleted_at_utc: Option<DateTime<Utc>>,
    /// When the customer was created.
    pub created_at_utc: DateTime<Utc>,
    /// Identity that created the row.
    pub created_by: Option<String>,
    /// When the customer was last updated.
    pub updated_at_utc: Option<DateTime<Utc>>,
    /// Identity that last updated the row.
    pub updated_by: Option<String>,
}

impl Customer {
    /// Build a new, active customer with a fresh id and customer number.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone: Option<String>,
        created_by: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_number: Self::generate_number(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone,
            address_line1: None,
            address_line2: None,
            city: None,
            state: None,
            postal_code: None,
            country: None,
            is_deleted: false,
            deleted_at_utc: None,
            created_at_utc: Utc::now(),
            created_by,
            updated_at_utc: None,
            updated_by: None,
        }
    }

    /// Generate a customer number: the prefix plus 12 uppercase hex digits.
    pub fn generate_number() -> String {
        let hex = Uuid::new_v4().simple().to_string().to_uppercase();
        format!("{CUSTOMER_NUMBER_PREFIX}{}", &hex[..12])
    }

    /// Whether the customer is visible to callers.
    pub fn is_active(&self) -> bool {
        !self.is_deleted
    }

    /// Display name, `"First Last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Mark the customer deleted at `now`.
    pub fn mark_deleted(&mut self, now: DateTime<Utc>, by: Option<String>) {
        self.is_deleted = true;
        self.deleted_at_utc = Some(now);
        self.updated_at_utc = Some(now);
        self.updated_by = by;
    }

    /// Whether personal data has already been scrubbed.
    pub fn is_anonymized(&self) -> bool {
        self.email == Self::anonymized_email(self.id)
    }

    /// Replace every personal field with a placeholder.
    pub fn anonymize(&mut self, now: DateTime<Utc>) {
        self.first_name = ANONYMIZED_FIRST_NAME.to_string();
        self.last_name = ANONYMIZED_LAST_NAME.to_string();
        self.email = Self::anonymized_email(self.id);
        self.phone = None;
        self.address_line1 = None;
        self.address_line2 = None;
        self.city = None;
        self.state = None;
        self.postal_code = None;
        self.country = None;
        self.updated_at_utc = Some(now);
    }

    /// Placeholder email kept unique per customer.
    pub fn anonymized_email(id: Uuid) -> String {
        format!("anonymized-{id}@invalid.local")
    }
}
