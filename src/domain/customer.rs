use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Customer row created for an order submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    /// Identifier assigned by the store on insert.
    pub id: i32,
    /// First name as typed into the order form.
    pub first_name: String,
    /// Email as typed into the order form.
    pub email: String,
    /// Timestamp for when the customer record was created.
    pub created_at: NaiveDateTime,
}

/// Payload required to insert a new customer.
///
/// Values are stored exactly as supplied; customers are never looked up or
/// reused by email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub first_name: String,
    pub email: String,
}

impl NewCustomer {
    #[must_use]
    pub fn new(first_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            email: email.into(),
        }
    }
}
