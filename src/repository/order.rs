use diesel::prelude::*;

use crate::{
    domain::order::{
        NewOrder as DomainNewOrder, NewOrderDetail as DomainNewOrderDetail, Order as DomainOrder,
        OrderDetail as DomainOrderDetail,
    },
    models::order::{
        NewOrder as DbNewOrder, NewOrderDetail as DbNewOrderDetail, Order as DbOrder,
        OrderDetail as DbOrderDetail,
    },
    repository::{DieselRepository, OrderReader, OrderWriter, RepositoryResult},
};

impl OrderReader for DieselRepository {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<DomainOrder>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let order = orders::table
            .filter(orders::id.eq(id))
            .first::<DbOrder>(&mut conn)
            .optional()?;

        Ok(order.map(Into::into))
    }

    fn get_order_by_submission_id(
        &self,
        submission_id: &str,
    ) -> RepositoryResult<Option<DomainOrder>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let order = orders::table
            .filter(orders::submission_id.eq(submission_id))
            .first::<DbOrder>(&mut conn)
            .optional()?;

        Ok(order.map(Into::into))
    }

    fn list_order_details(&self, order_id: i32) -> RepositoryResult<Vec<DomainOrderDetail>> {
        use crate::schema::order_details;

        let mut conn = self.conn()?;
        let rows = order_details::table
            .filter(order_details::order_id.eq(order_id))
            .order(order_details::id.asc())
            .load::<DbOrderDetail>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl OrderWriter for DieselRepository {
    fn create_order(&self, new_order: &DomainNewOrder) -> RepositoryResult<DomainOrder> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let db_new = DbNewOrder::from(new_order);

        let created = diesel::insert_into(orders::table)
            .values(&db_new)
            .get_result::<DbOrder>(&mut conn)?;

        Ok(created.into())
    }

    fn create_order_detail(
        &self,
        new_detail: &DomainNewOrderDetail,
    ) -> RepositoryResult<DomainOrderDetail> {
        use crate::schema::order_details;

        let mut conn = self.conn()?;
        let db_new = DbNewOrderDetail::from(new_detail);

        let created = diesel::insert_into(order_details::table)
            .values(&db_new)
            .get_result::<DbOrderDetail>(&mut conn)?;

        Ok(created.into())
    }
}
