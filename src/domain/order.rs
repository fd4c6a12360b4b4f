use super::errors::DomainError;

pub const ORDER_ID_REQUIRED: &str = "Order id required.";
pub const ORDER_ID_NOT_INTEGER: &str = "Order id must be an integer.";
pub const PRICE_UPDATE_REQUIRED: &str = "Order number, productcode and new price required.";
pub const NO_ORDERS_FOUND: &str = "No orders found";

/// One product's quantity, price and status within an order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLineItem {
    pub quantity_ordered: f64,
    pub price_each: f64,
    pub sales: f64,
    pub order_date: String,
    pub status: String,
    pub product_code: String,
}

/// Parse an order number taken from a request path.
pub fn parse_order_number(raw: &str) -> Result<i64, DomainError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(DomainError::InvalidInput(ORDER_ID_REQUIRED.to_string()));
    }
    raw.parse()
        .map_err(|_| DomainError::InvalidInput(ORDER_ID_NOT_INTEGER.to_string()))
}

/// A validated request to set the unit price of one line item.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceUpdate {
    pub order_number: i64,
    pub product_code: String,
    pub new_price: f64,
}

impl PriceUpdate {
    /// Every field must be present. The order number must be an integer and
    /// the price a finite number; anything else is reported with the same
    /// message. The product code is kept verbatim since it is matched exactly.
    pub fn parse(order_number: &str, product_code: &str, new_price: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidInput(PRICE_UPDATE_REQUIRED.to_string());

        let order_number = order_number.trim();
        let new_price = new_price.trim();
        if order_number.is_empty() || product_code.trim().is_empty() || new_price.is_empty() {
            return Err(invalid());
        }

        let order_number = order_number.parse::<i64>().map_err(|_| invalid())?;
        let new_price = new_price
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite())
            .ok_or_else(invalid)?;

        Ok(Self {
            order_number,
            product_code: product_code.to_string(),
            new_price,
        })
    }
}
