use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::domain::customer::NewCustomer;

/// Longest accepted submission token; a hyphenated UUID is 36 characters.
const SUBMISSION_ID_MAX_LEN: u64 = 64;

/// Result type returned by the order form helpers.
pub type OrderFormResult<T> = Result<T, OrderFormError>;

/// Errors that can occur while processing order forms.
#[derive(Debug, Error)]
pub enum OrderFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The submission token is not a UUID.
    #[error("invalid submission id `{value}`")]
    InvalidSubmissionId { value: String },
    /// The tracking field does not hold a numeric order id.
    #[error("invalid order id `{value}`")]
    InvalidOrderId { value: String },
}

/// Form payload emitted when submitting the order form.
///
/// Name, email, dish and quantity are forwarded to the store untouched;
/// the store decides whether to accept them.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PlaceOrderForm {
    pub customer_name: String,
    pub customer_email: String,
    pub dish_id: i32,
    pub quantity: i32,
    /// Token rendered into the form so repeated submissions can be recognised.
    #[serde(default)]
    #[validate(length(max = SUBMISSION_ID_MAX_LEN))]
    pub submission_id: Option<String>,
}

/// Order submission ready to be handed to the order service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSubmission {
    pub customer: NewCustomer,
    pub dish_id: i32,
    pub quantity: i32,
    pub submission_id: Option<String>,
}

impl PlaceOrderForm {
    /// Converts the payload into an [`OrderSubmission`].
    ///
    /// A blank submission token is treated as absent. A present token is
    /// normalised to the hyphenated lowercase UUID form.
    pub fn into_submission(self) -> OrderFormResult<OrderSubmission> {
        self.validate()?;

        let submission_id = match self.submission_id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => {
                let parsed =
                    Uuid::parse_str(value).map_err(|_| OrderFormError::InvalidSubmissionId {
                        value: value.to_string(),
                    })?;
                Some(parsed.hyphenated().to_string())
            }
        };

        Ok(OrderSubmission {
            customer: NewCustomer::new(self.customer_name, self.customer_email),
            dish_id: self.dish_id,
            quantity: self.quantity,
            submission_id,
        })
    }
}

/// Query string of the order tracking form.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct TrackOrderForm {
    /// Raw contents of the order id field.
    pub order_id: Option<String>,
}

impl TrackOrderForm {
    /// Returns `Ok(None)` when the field was not submitted or left blank.
    pub fn parse_order_id(&self) -> OrderFormResult<Option<i32>> {
        match self.order_id.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => value
                .parse::<i32>()
                .map(Some)
                .map_err(|_| OrderFormError::InvalidOrderId {
                    value: value.to_string(),
                }),
        }
    }
}

/// Fresh token for a newly rendered order form.
pub fn new_submission_id() -> String {
    Uuid::new_v4().hyphenated().to_string()
}

/// Normalised form of `raw` when it is a valid submission token.
pub fn parse_submission_id(raw: Option<&str>) -> Option<String> {
    let value = raw.map(str::trim).filter(|value| !value.is_empty())?;
    Uuid::parse_str(value)
        .ok()
        .map(|parsed| parsed.hyphenated().to_string())
}

/// Query string of the orders page.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct OrdersPageQuery {
    /// Token of an earlier submission that did not complete.
    pub submission_id: Option<String>,
}

impl OrdersPageQuery {
    /// Token to render into the order form: the carried one when valid, a fresh one otherwise.
    pub fn submission_id_or_new(&self) -> String {
        parse_submission_id(self.submission_id.as_deref()).unwrap_or_else(new_submission_id)
    }
}
