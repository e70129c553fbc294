pub mod customer;
pub mod delivery;
pub mod dish;
pub mod order;
