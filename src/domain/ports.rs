use std::sync::Arc;

use super::errors::DomainError;
use super::order::{OrderLineItem, PriceUpdate};

/// Access to the sales order line item table.
///
/// Every call is a single statement against the live store; implementations
/// hold no cached rows between calls.
pub trait SalesRepository: Send + Sync + 'static {
    fn count(&self) -> Result<i64, DomainError>;
    fn find_by_order_number(&self, order_number: i64) -> Result<Vec<OrderLineItem>, DomainError>;
    /// Returns the number of rows the update touched.
    fn update_price(&self, update: &PriceUpdate) -> Result<usize, DomainError>;
}

impl<R: SalesRepository + ?Sized> SalesRepository for Arc<R> {
    fn count(&self) -> Result<i64, DomainError> {
        (**self).count()
    }

    fn find_by_order_number(&self, order_number: i64) -> Result<Vec<OrderLineItem>, DomainError> {
        (**self).find_by_order_number(order_number)
    }

    fn update_price(&self, update: &PriceUpdate) -> Result<usize, DomainError> {
        (**self).update_price(update)
    }
}
