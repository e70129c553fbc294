use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Delivery progress for an order, maintained outside this service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Delivery {
    pub id: i32,
    /// Order the delivery belongs to.
    pub order_id: i32,
    /// Free-form status text written by the delivery process.
    pub status: String,
    /// Scheduled or actual delivery date, when known.
    pub delivery_date: Option<NaiveDate>,
}
