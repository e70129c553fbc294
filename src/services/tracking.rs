use crate::domain::delivery::Delivery;
use crate::repository::DeliveryReader;
use crate::services::{ServiceError, ServiceResult};

/// Looks up the delivery for `order_id`, expecting exactly one row.
pub fn track_order<R>(repo: &R, order_id: i32) -> ServiceResult<Delivery>
where
    R: DeliveryReader + ?Sized,
{
    repo.get_single_delivery_by_order_id(order_id)
        .map_err(ServiceError::from)
}
