//! Helpers for integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use tempfile::TempDir;

use restaurant_orders::db::{DbPool, establish_connection_pool, run_pending_migrations};
use restaurant_orders::schema::{customers, deliveries, dishes, order_details, orders};

/// Temporary database used in integration tests.
pub struct TestDb {
    _dir: TempDir,
    path: PathBuf,
    pool: DbPool,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory.");
        let path = dir.path().join(filename);
        let url = path.to_str().expect("Temporary path is not valid UTF-8.");

        let pool = establish_connection_pool(url).expect("Failed to establish SQLite connection.");
        run_pending_migrations(&pool).expect("Migrations failed");

        TestDb {
            _dir: dir,
            path,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn seed_dish(&self, id: i32, name: &str, price_cents: i32) {
        let mut conn = self.pool.get().expect("connection");
        diesel::insert_into(dishes::table)
            .values((
                dishes::id.eq(id),
                dishes::name.eq(name),
                dishes::price_cents.eq(price_cents),
            ))
            .execute(&mut conn)
            .expect("seed dish");
    }

    pub fn seed_delivery(&self, order_id: i32, status: &str, delivery_date: Option<NaiveDate>) {
        let mut conn = self.pool.get().expect("connection");
        diesel::insert_into(deliveries::table)
            .values((
                deliveries::order_id.eq(order_id),
                deliveries::status.eq(status),
                deliveries::delivery_date.eq(delivery_date),
            ))
            .execute(&mut conn)
            .expect("seed delivery");
    }

    /// Make the store reject every insert into `table`.
    pub fn reject_inserts_into(&self, table: &str) {
        let mut conn = self.pool.get().expect("connection");
        conn.batch_execute(&format!(
            "CREATE TRIGGER reject_{table} BEFORE INSERT ON {table} \
             BEGIN SELECT RAISE(ABORT, '{table} rejected'); END;"
        ))
        .expect("create trigger");
    }

    pub fn count_customers(&self) -> i64 {
        let mut conn = self.pool.get().expect("connection");
        customers::table
            .count()
            .get_result(&mut conn)
            .expect("count customers")
    }

    pub fn count_orders(&self) -> i64 {
        let mut conn = self.pool.get().expect("connection");
        orders::table
            .count()
            .get_result(&mut conn)
            .expect("count orders")
    }

    pub fn last_order_id(&self) -> Option<i32> {
        let mut conn = self.pool.get().expect("connection");
        orders::table
            .select(orders::id)
            .order(orders::id.desc())
            .first(&mut conn)
            .optional()
            .expect("last order id")
    }

    pub fn count_order_details(&self) -> i64 {
        let mut conn = self.pool.get().expect("connection");
        order_details::table
            .count()
            .get_result(&mut conn)
            .expect("count order details")
    }
}
