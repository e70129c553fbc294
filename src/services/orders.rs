//! Order placement.
//!
//! Placing an order is three dependent, independently committed store
//! writes: customer, order, order detail. A failed step stops the sequence
//! and leaves every earlier write in place. [`OrderPlacementError`] reports
//! which step failed and which rows were already committed.

use serde::Serialize;
use thiserror::Error;

use crate::domain::order::{NewOrder, NewOrderDetail, Order, OrderDetail};
use crate::forms::orders::{OrderSubmission, PlaceOrderForm};
use crate::repository::{CustomerWriter, OrderReader, OrderWriter, RepositoryError};
use crate::services::{ServiceError, ServiceResult};

/// Failure of one order placement step.
#[derive(Debug, Error)]
pub enum OrderPlacementError {
    /// Looking up an earlier submission with the same token, or its order
    /// lines, failed. Nothing was written.
    #[error("error looking up submission {submission_id}: {source}")]
    Lookup {
        submission_id: String,
        source: RepositoryError,
    },
    /// The customer insert failed. Nothing was written.
    #[error("error adding customer: {source}")]
    Customer { source: RepositoryError },
    /// The order insert failed. The customer row remains without an order.
    #[error("error creating order for customer {customer_id}: {source}")]
    Order {
        customer_id: i32,
        source: RepositoryError,
    },
    /// The order detail insert failed. Customer and order remain without a detail.
    #[error("error adding order details to order {order_id}: {source}")]
    OrderDetail {
        customer_id: i32,
        order_id: i32,
        source: RepositoryError,
    },
}

impl OrderPlacementError {
    /// Short machine-readable name of the failed step.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Lookup { .. } => "lookup",
            Self::Customer { .. } => "customer",
            Self::Order { .. } => "order",
            Self::OrderDetail { .. } => "order_detail",
        }
    }

    /// Identifier of the order row committed before the failure, if any.
    pub fn committed_order_id(&self) -> Option<i32> {
        match self {
            Self::OrderDetail { order_id, .. } => Some(*order_id),
            _ => None,
        }
    }
}

/// How a submission was resolved.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlacementOutcome {
    /// All three rows were written by this submission.
    Created,
    /// An earlier submission stopped after the order insert; only the detail was written now.
    Resumed,
    /// The submission had already completed; nothing was written.
    Duplicate,
}

/// Result of a successful order placement.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PlacedOrder {
    pub order_id: i32,
    pub customer_id: i32,
    pub detail: OrderDetail,
    pub outcome: PlacementOutcome,
}

impl PlacedOrder {
    /// Confirmation shown to the customer.
    pub fn confirmation_message(&self) -> String {
        format!("Order placed successfully! Your Order ID: {}", self.order_id)
    }
}

/// Places an order from the submitted form.
///
/// Without a submission token every call runs all three inserts. With a
/// token, an order already created from the same token is reused: a
/// complete one is returned as is, an incomplete one only gets its detail
/// row.
pub fn place_order<R>(repo: &R, form: PlaceOrderForm) -> ServiceResult<PlacedOrder>
where
    R: CustomerWriter + OrderReader + OrderWriter + ?Sized,
{
    let submission = form
        .into_submission()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if let Some(order) = find_submitted_order(repo, &submission)? {
        return resume_order(repo, order, &submission);
    }

    let customer = repo
        .create_customer(&submission.customer)
        .map_err(|source| OrderPlacementError::Customer { source })?;

    let mut new_order = NewOrder::new(customer.id);
    if let Some(token) = submission.submission_id.as_deref() {
        new_order = new_order.with_submission_id(token);
    }

    let order = match repo.create_order(&new_order) {
        Ok(order) => order,
        Err(RepositoryError::ConstraintViolation(message))
            if submission.submission_id.is_some() =>
        {
            // A concurrent submission with the same token won the insert.
            let token = submission.submission_id.as_deref().unwrap_or_default();
            return match repo.get_order_by_submission_id(token) {
                Ok(Some(order)) => {
                    log::info!(
                        "Submission already stored as order {}, customer {} left unused",
                        order.id,
                        customer.id
                    );
                    resume_order(repo, order, &submission)
                }
                Ok(None) => Err(OrderPlacementError::Order {
                    customer_id: customer.id,
                    source: RepositoryError::ConstraintViolation(message),
                }
                .into()),
                Err(source) => Err(OrderPlacementError::Order {
                    customer_id: customer.id,
                    source,
                }
                .into()),
            };
        }
        Err(source) => {
            return Err(OrderPlacementError::Order {
                customer_id: customer.id,
                source,
            }
            .into());
        }
    };

    let detail = add_detail(repo, &order, &submission)?;

    log::info!(
        "Placed order {} for customer {} (dish {}, quantity {})",
        order.id,
        customer.id,
        detail.dish_id,
        detail.quantity
    );

    Ok(PlacedOrder {
        order_id: order.id,
        customer_id: customer.id,
        detail,
        outcome: PlacementOutcome::Created,
    })
}

/// Order already stored under the submission's token, if it carries one.
fn find_submitted_order<R>(
    repo: &R,
    submission: &OrderSubmission,
) -> Result<Option<Order>, OrderPlacementError>
where
    R: OrderReader + ?Sized,
{
    let Some(token) = submission.submission_id.as_deref() else {
        return Ok(None);
    };

    repo.get_order_by_submission_id(token)
        .map_err(|source| OrderPlacementError::Lookup {
            submission_id: token.to_string(),
            source,
        })
}

fn resume_order<R>(
    repo: &R,
    order: Order,
    submission: &OrderSubmission,
) -> ServiceResult<PlacedOrder>
where
    R: OrderReader + OrderWriter + ?Sized,
{
    let details = repo.list_order_details(order.id).map_err(|source| {
        OrderPlacementError::Lookup {
            submission_id: order.submission_id.clone().unwrap_or_default(),
            source,
        }
    })?;

    if let Some(detail) = details.into_iter().next() {
        log::info!("Submission for order {} already completed", order.id);
        return Ok(PlacedOrder {
            order_id: order.id,
            customer_id: order.customer_id,
            detail,
            outcome: PlacementOutcome::Duplicate,
        });
    }

    let detail = add_detail(repo, &order, submission)?;

    log::info!("Resumed order {} with its missing detail", order.id);

    Ok(PlacedOrder {
        order_id: order.id,
        customer_id: order.customer_id,
        detail,
        outcome: PlacementOutcome::Resumed,
    })
}

fn add_detail<R>(
    repo: &R,
    order: &Order,
    submission: &OrderSubmission,
) -> Result<OrderDetail, OrderPlacementError>
where
    R: OrderWriter + ?Sized,
{
    let new_detail = NewOrderDetail::new(order.id, submission.dish_id, submission.quantity);

    repo.create_order_detail(&new_detail)
        .map_err(|source| OrderPlacementError::OrderDetail {
            customer_id: order.customer_id,
            order_id: order.id,
            source,
        })
}
