use crate::domain::errors::DomainError;
use crate::domain::order::{parse_order_number, OrderLineItem, PriceUpdate, NO_ORDERS_FOUND};
use crate::domain::ports::SalesRepository;

pub struct SalesService<R> {
    repo: R,
}

impl<R: SalesRepository> SalesService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn count(&self) -> Result<i64, DomainError> {
        self.repo.count()
    }

    /// Line items of one order in the store's natural row order.
    ///
    /// An order without any line items is reported as `NotFound`.
    pub fn order_details(&self, raw_order_number: &str) -> Result<Vec<OrderLineItem>, DomainError> {
        let order_number = parse_order_number(raw_order_number)?;
        let items = self.repo.find_by_order_number(order_number)?;
        if items.is_empty() {
            return Err(DomainError::NotFound(NO_ORDERS_FOUND.to_string()));
        }
        Ok(items)
    }

    /// Sets the price of every line item matching order number and product
    /// code and recomputes its sales amount. Matching nothing is not an error.
    pub fn update_price(
        &self,
        raw_order_number: &str,
        raw_product_code: &str,
        raw_new_price: &str,
    ) -> Result<usize, DomainError> {
        let update = PriceUpdate::parse(raw_order_number, raw_product_code, raw_new_price)?;
        let affected = self.repo.update_price(&update)?;
        log::debug!(
            "Price of {}/{} set to {} ({} rows)",
            update.order_number,
            update.product_code,
            update.new_price,
            affected
        );
        Ok(affected)
    }
}
