use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::order::{
    NewOrder as DomainNewOrder, NewOrderDetail as DomainNewOrderDetail, Order as DomainOrder,
    OrderDetail as DomainOrderDetail,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(
    table_name = crate::schema::orders,
    belongs_to(super::customer::Customer, foreign_key = customer_id)
)]
pub struct Order {
    pub id: i32,
    pub customer_id: i32,
    pub total_amount: i32,
    pub submission_id: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::order_details)]
#[diesel(belongs_to(Order, foreign_key = order_id))]
pub struct OrderDetail {
    pub id: i32,
    pub order_id: i32,
    pub dish_id: i32,
    pub quantity: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder<'a> {
    pub customer_id: i32,
    pub total_amount: i32,
    pub submission_id: Option<&'a str>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::order_details)]
pub struct NewOrderDetail {
    pub order_id: i32,
    pub dish_id: i32,
    pub quantity: i32,
}

impl From<Order> for DomainOrder {
    fn from(value: Order) -> Self {
        Self {
            id: value.id,
            customer_id: value.customer_id,
            total_amount: value.total_amount,
            submission_id: value.submission_id,
            created_at: value.created_at,
        }
    }
}

impl From<OrderDetail> for DomainOrderDetail {
    fn from(value: OrderDetail) -> Self {
        Self {
            id: value.id,
            order_id: value.order_id,
            dish_id: value.dish_id,
            quantity: value.quantity,
        }
    }
}

impl<'a> From<&'a DomainNewOrder> for NewOrder<'a> {
    fn from(value: &'a DomainNewOrder) -> Self {
        Self {
            customer_id: value.customer_id,
            total_amount: value.total_amount,
            submission_id: value.submission_id.as_deref(),
        }
    }
}

impl From<&DomainNewOrderDetail> for NewOrderDetail {
    fn from(value: &DomainNewOrderDetail) -> Self {
        Self {
            order_id: value.order_id,
            dish_id: value.dish_id,
            quantity: value.quantity,
        }
    }
}
