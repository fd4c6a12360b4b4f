//! Test fixtures shared by the unit and HTTP tests.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use diesel::prelude::*;

use crate::db::{create_pool, DbConfig, DbPool};
use crate::domain::errors::DomainError;
use crate::domain::order::{OrderLineItem, PriceUpdate};
use crate::domain::ports::SalesRepository;
use crate::schema::sales_data_sample;

pub fn line_item(product_code: &str, quantity_ordered: f64, price_each: f64) -> OrderLineItem {
    OrderLineItem {
        quantity_ordered,
        price_each,
        sales: quantity_ordered * price_each,
        order_date: "2/24/2003 0:00".to_string(),
        status: "Shipped".to_string(),
        product_code: product_code.to_string(),
    }
}

// ── In-memory repository ─────────────────────────────────────────────────────

#[derive(Default)]
struct InMemoryState {
    rows: Vec<(i64, OrderLineItem)>,
    failure: Option<String>,
    calls: usize,
}

/// Keeps rows in insertion order, which plays the role of the store's
/// natural row order. Clones share the same rows.
#[derive(Clone, Default)]
pub struct InMemorySalesRepository {
    state: Arc<Mutex<InMemoryState>>,
}

impl InMemorySalesRepository {
    pub fn with_rows(rows: Vec<(i64, OrderLineItem)>) -> Self {
        let repo = Self::default();
        repo.state.lock().unwrap().rows = rows;
        repo
    }

    /// Every call fails with a store error carrying `message`.
    pub fn failing(message: &str) -> Self {
        let repo = Self::default();
        repo.state.lock().unwrap().failure = Some(message.to_string());
        repo
    }

    pub fn calls(&self) -> usize {
        self.state.lock().unwrap().calls
    }

    fn with_state<T>(
        &self,
        f: impl FnOnce(&mut Vec<(i64, OrderLineItem)>) -> T,
    ) -> Result<T, DomainError> {
        let mut state = self.state.lock().unwrap();
        state.calls += 1;
        if let Some(message) = &state.failure {
            return Err(DomainError::Store(message.clone()));
        }
        Ok(f(&mut state.rows))
    }
}

impl SalesRepository for InMemorySalesRepository {
    fn count(&self) -> Result<i64, DomainError> {
        self.with_state(|rows| rows.len() as i64)
    }

    fn find_by_order_number(&self, order_number: i64) -> Result<Vec<OrderLineItem>, DomainError> {
        self.with_state(|rows| {
            rows.iter()
                .filter(|(number, _)| *number == order_number)
                .map(|(_, item)| item.clone())
                .collect()
        })
    }

    fn update_price(&self, update: &PriceUpdate) -> Result<usize, DomainError> {
        self.with_state(|rows| {
            let mut affected = 0;
            for (number, item) in rows.iter_mut() {
                if *number == update.order_number && item.product_code == update.product_code {
                    item.price_each = update.new_price;
                    item.sales = update.new_price * item.quantity_ordered;
                    affected += 1;
                }
            }
            affected
        })
    }
}

// ── SQLite fixture ───────────────────────────────────────────────────────────

/// A SQLite database file in the temp directory, removed on drop.
pub struct TempDatabase {
    path: PathBuf,
}

impl TempDatabase {
    pub fn new() -> Self {
        let path = std::env::temp_dir().join(format!("sales-{}.db", uuid::Uuid::new_v4()));
        Self { path }
    }

    pub fn url(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

impl Drop for TempDatabase {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Creates the table the service expects, including a column the service
/// never reads, and returns a pool connected to it.
pub fn setup_db() -> (TempDatabase, DbPool) {
    let db = TempDatabase::new();
    let pool = create_pool(&DbConfig::new(db.url())).expect("Failed to create pool");
    {
        let mut conn = pool.get().expect("Failed to get connection");
        diesel::sql_query(
            "CREATE TABLE sales_data_sample (
                ORDERNUMBER INTEGER,
                QUANTITYORDERED INTEGER,
                PRICEEACH REAL,
                ORDERLINENUMBER INTEGER,
                SALES REAL,
                ORDERDATE TEXT,
                STATUS TEXT,
                PRODUCTCODE TEXT
            )",
        )
        .execute(&mut conn)
        .expect("Failed to create table");
    }
    (db, pool)
}

pub fn insert_rows(pool: &DbPool, rows: &[(i64, OrderLineItem)]) {
    let mut conn = pool.get().expect("Failed to get connection");
    for (number, item) in rows {
        diesel::insert_into(sales_data_sample::table)
            .values((
                sales_data_sample::order_number.eq(*number),
                sales_data_sample::quantity_ordered.eq(item.quantity_ordered),
                sales_data_sample::price_each.eq(item.price_each),
                sales_data_sample::sales.eq(item.sales),
                sales_data_sample::order_date.eq(Some(item.order_date.as_str())),
                sales_data_sample::status.eq(Some(item.status.as_str())),
                sales_data_sample::product_code.eq(Some(item.product_code.as_str())),
            ))
            .execute(&mut conn)
            .expect("Failed to insert row");
    }
}

/// The sample order used throughout the tests: order 10001 with two line
/// items and order 10002 with one.
pub fn sample_rows() -> Vec<(i64, OrderLineItem)> {
    vec![
        (10001, line_item("S10_1678", 30.0, 95.70)),
        (10001, line_item("S10_1949", 50.0, 214.30)),
        (10002, line_item("S10_1678", 34.0, 81.35)),
    ]
}
