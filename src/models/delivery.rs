use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::delivery::Delivery as DomainDelivery;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::deliveries)]
pub struct Delivery {
    pub id: i32,
    pub order_id: i32,
    pub status: String,
    pub delivery_date: Option<NaiveDate>,
}

impl From<Delivery> for DomainDelivery {
    fn from(value: Delivery) -> Self {
        Self {
            id: value.id,
            order_id: value.order_id,
            status: value.status,
            delivery_date: value.delivery_date,
        }
    }
}
