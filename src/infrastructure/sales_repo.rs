use diesel::dsl::count_star;
use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::order::{OrderLineItem, PriceUpdate};
use crate::domain::ports::SalesRepository;
use crate::schema::sales_data_sample;

use super::models::OrderLineRow;

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        DomainError::Store(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Store(e.to_string())
    }
}

// ── Repository ────────────────────────────────────────────────────────────────

/// Each call checks a connection out of the pool for exactly one statement.
/// The connection goes back to the pool when the guard drops, on success and
/// on error alike.
#[derive(Clone)]
pub struct DieselSalesRepository {
    pool: DbPool,
}

impl DieselSalesRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl SalesRepository for DieselSalesRepository {
    fn count(&self) -> Result<i64, DomainError> {
        let mut conn = self.pool.get()?;

        let count = sales_data_sample::table
            .select(count_star())
            .first::<i64>(&mut conn)
            .optional()?;

        Ok(count.unwrap_or(0))
    }

    fn find_by_order_number(&self, order_number: i64) -> Result<Vec<OrderLineItem>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = sales_data_sample::table
            .filter(sales_data_sample::order_number.eq(order_number))
            .select(OrderLineRow::as_select())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(OrderLineItem::from).collect())
    }

    fn update_price(&self, update: &PriceUpdate) -> Result<usize, DomainError> {
        let mut conn = self.pool.get()?;

        let affected = diesel::update(
            sales_data_sample::table
                .filter(sales_data_sample::order_number.eq(update.order_number))
                .filter(sales_data_sample::product_code.eq(update.product_code.as_str())),
        )
        .set((
            sales_data_sample::price_each.eq(update.new_price),
            sales_data_sample::sales.eq(sales_data_sample::quantity_ordered * update.new_price),
        ))
        .execute(&mut conn)?;

        Ok(affected)
    }
}
