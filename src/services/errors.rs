use thiserror::Error;

use crate::repository::RepositoryError;
use crate::services::orders::OrderPlacementError;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by the service layer to the route handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No record matched where exactly one was expected.
    #[error("record not found")]
    NotFound,
    /// Several records matched where exactly one was expected.
    #[error("expected a single record, found {0}")]
    NotUnique(usize),
    /// Submitted form data could not be turned into a request.
    #[error("form error: {0}")]
    Form(String),
    /// One of the order placement steps failed.
    #[error(transparent)]
    OrderPlacement(#[from] OrderPlacementError),
    /// The store request failed.
    #[error("repository error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound => Self::NotFound,
            RepositoryError::NotUnique(count) => Self::NotUnique(count),
            other => Self::Repository(other),
        }
    }
}
