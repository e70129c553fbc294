pub mod errors;
pub mod menu;
pub mod orders;
pub mod tracking;

pub use errors::{ServiceError, ServiceResult};
