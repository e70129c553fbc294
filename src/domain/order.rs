use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a customer order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Order {
    /// Identifier assigned by the store on insert.
    pub id: i32,
    /// Customer that placed the order.
    pub customer_id: i32,
    /// Total amount of the order. Submitted as zero and never recalculated.
    pub total_amount: i32,
    /// Client-generated token used to recognise repeated submissions.
    pub submission_id: Option<String>,
    /// Timestamp for when the order record was created.
    pub created_at: NaiveDateTime,
}

/// Payload required to insert a new order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub customer_id: i32,
    pub total_amount: i32,
    pub submission_id: Option<String>,
}

impl NewOrder {
    /// Build an order payload for `customer_id` with a zero total.
    pub fn new(customer_id: i32) -> Self {
        Self {
            customer_id,
            total_amount: 0,
            submission_id: None,
        }
    }

    /// Tag the order with the submission token it was created from.
    pub fn with_submission_id(mut self, submission_id: impl Into<String>) -> Self {
        self.submission_id = Some(submission_id.into());
        self
    }
}

/// A single dish line attached to an order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct OrderDetail {
    pub id: i32,
    pub order_id: i32,
    pub dish_id: i32,
    pub quantity: i32,
}

/// Payload required to insert an order line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderDetail {
    pub order_id: i32,
    pub dish_id: i32,
    pub quantity: i32,
}

impl NewOrderDetail {
    pub fn new(order_id: i32, dish_id: i32, quantity: i32) -> Self {
        Self {
            order_id,
            dish_id,
            quantity,
        }
    }
}
