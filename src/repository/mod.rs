use crate::db::{DbConnection, DbPool};
use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::delivery::Delivery;
use crate::domain::dish::Dish;
use crate::domain::order::{NewOrder, NewOrderDetail, Order, OrderDetail};

pub mod customer;
pub mod delivery;
pub mod dish;
pub mod errors;
pub mod order;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
///
/// Every method checks out its own connection and issues independent
/// statements; nothing spans more than one call.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only access to the menu.
pub trait DishReader {
    fn list_dishes(&self) -> RepositoryResult<Vec<Dish>>;
}

/// Read-only operations over customer records.
pub trait CustomerReader {
    fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>>;
}

/// Write operations over customer records.
pub trait CustomerWriter {
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
}

/// Read-only operations over orders and their lines.
pub trait OrderReader {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
    fn get_order_by_submission_id(&self, submission_id: &str) -> RepositoryResult<Option<Order>>;
    fn list_order_details(&self, order_id: i32) -> RepositoryResult<Vec<OrderDetail>>;
}

/// Write operations over orders and their lines. Each call is a single insert.
pub trait OrderWriter {
    fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
    fn create_order_detail(&self, new_detail: &NewOrderDetail) -> RepositoryResult<OrderDetail>;
}

/// Read-only access to delivery progress.
pub trait DeliveryReader {
    /// Fetch the one delivery row for `order_id`.
    ///
    /// Fails with [`RepositoryError::NotFound`] when no row matches and with
    /// [`RepositoryError::NotUnique`] when several do.
    fn get_single_delivery_by_order_id(&self, order_id: i32) -> RepositoryResult<Delivery>;
}
