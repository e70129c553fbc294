use diesel::prelude::*;

use crate::domain::delivery::Delivery as DomainDelivery;
use crate::models::delivery::Delivery as DbDelivery;
use crate::repository::{DeliveryReader, DieselRepository, RepositoryError, RepositoryResult};

impl DeliveryReader for DieselRepository {
    fn get_single_delivery_by_order_id(&self, order_id: i32) -> RepositoryResult<DomainDelivery> {
        use crate::schema::deliveries;

        let mut conn = self.conn()?;

        // Two rows are enough to tell "one" from "many".
        let mut rows = deliveries::table
            .filter(deliveries::order_id.eq(order_id))
            .order(deliveries::id.asc())
            .limit(2)
            .load::<DbDelivery>(&mut conn)?;

        match rows.len() {
            0 => Err(RepositoryError::NotFound),
            1 => Ok(rows.remove(0).into()),
            _ => {
                let total = deliveries::table
                    .filter(deliveries::order_id.eq(order_id))
                    .count()
                    .get_result::<i64>(&mut conn)?;
                Err(RepositoryError::NotUnique(total as usize))
            }
        }
    }
}
