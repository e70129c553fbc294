use mockall::mock;

use super::{
    CustomerReader, CustomerWriter, DeliveryReader, DishReader, OrderReader, OrderWriter,
    RepositoryResult,
};
use crate::domain::{
    customer::{Customer, NewCustomer},
    delivery::Delivery,
    dish::Dish,
    order::{NewOrder, NewOrderDetail, Order, OrderDetail},
};

mock! {
    pub DishReader {}

    impl DishReader for DishReader {
        fn list_dishes(&self) -> RepositoryResult<Vec<Dish>>;
    }
}

mock! {
    pub DeliveryReader {}

    impl DeliveryReader for DeliveryReader {
        fn get_single_delivery_by_order_id(&self, order_id: i32) -> RepositoryResult<Delivery>;
    }
}

mock! {
    pub OrderStore {}

    impl CustomerReader for OrderStore {
        fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>>;
    }

    impl CustomerWriter for OrderStore {
        fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
    }

    impl OrderReader for OrderStore {
        fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
        fn get_order_by_submission_id(&self, submission_id: &str) -> RepositoryResult<Option<Order>>;
        fn list_order_details(&self, order_id: i32) -> RepositoryResult<Vec<OrderDetail>>;
    }

    impl OrderWriter for OrderStore {
        fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
        fn create_order_detail(&self, new_detail: &NewOrderDetail) -> RepositoryResult<OrderDetail>;
    }
}
