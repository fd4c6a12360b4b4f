use diesel::prelude::*;

use crate::domain::order::OrderLineItem;
use crate::schema::sales_data_sample;

/// The columns of a line item in the order the detail query selects them.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = sales_data_sample)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OrderLineRow {
    pub quantity_ordered: f64,
    pub price_each: f64,
    pub sales: f64,
    pub order_date: Option<String>,
    pub status: Option<String>,
    pub product_code: Option<String>,
}

impl From<OrderLineRow> for OrderLineItem {
    fn from(row: OrderLineRow) -> Self {
        Self {
            quantity_ordered: row.quantity_ordered,
            price_each: row.price_each,
            sales: row.sales,
            order_date: row.order_date.unwrap_or_default(),
            status: row.status.unwrap_or_default(),
            product_code: row.product_code.unwrap_or_default(),
        }
    }
}
