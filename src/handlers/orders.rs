use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::order::OrderLineItem;
use crate::errors::{AppError, ErrorResponse};
use crate::AppService;

// ── Response DTOs ────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct CountResponse {
    pub count: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineResponse {
    pub quantity_ordered: f64,
    pub price_each: f64,
    pub sales: f64,
    pub order_date: String,
    pub status: String,
    pub product_code: String,
}

impl From<OrderLineItem> for OrderLineResponse {
    fn from(item: OrderLineItem) -> Self {
        Self {
            quantity_ordered: item.quantity_ordered,
            price_each: item.price_each,
            sales: item.sales,
            order_date: item.order_date,
            status: item.status,
            product_code: item.product_code,
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /count
///
/// Returns the number of rows in the sales table.
#[utoipa::path(
    get,
    path = "/count",
    responses(
        (status = 200, description = "Row count", body = CountResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    ),
    tag = "orders"
)]
pub async fn count_orders(service: web::Data<AppService>) -> Result<HttpResponse, AppError> {
    let count = web::block(move || service.count())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(CountResponse { count }))
}

/// GET /orders/{id}
///
/// Returns the line items of one order in the store's row order.
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(
        ("id" = i64, Path, description = "Order number"),
    ),
    responses(
        (status = 200, description = "Line items of the order", body = [OrderLineResponse]),
        (status = 400, description = "Missing or non-integer order id", body = ErrorResponse),
        (status = 404, description = "No line items for the order", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    ),
    tag = "orders"
)]
pub async fn get_order(
    service: web::Data<AppService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::debug!("Fetching line items of order {:?}", id);

    let items = web::block(move || service.order_details(&id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let body: Vec<OrderLineResponse> = items.into_iter().map(OrderLineResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// PUT /orders/{ordernumber}/{productcode}/{newprice}
///
/// Sets the unit price of the matching line items and recomputes their sales
/// amount. The response is sent once the store has applied the update.
#[utoipa::path(
    put,
    path = "/orders/{ordernumber}/{productcode}/{newprice}",
    params(
        ("ordernumber" = i64, Path, description = "Order number"),
        ("productcode" = String, Path, description = "Product code"),
        ("newprice" = f64, Path, description = "New unit price"),
    ),
    responses(
        (status = 200, description = "Update applied (possibly to no rows)"),
        (status = 400, description = "Missing or invalid parameter", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    ),
    tag = "orders"
)]
pub async fn update_price(
    service: web::Data<AppService>,
    path: web::Path<(String, String, String)>,
) -> Result<HttpResponse, AppError> {
    let (order_number, product_code, new_price) = path.into_inner();

    web::block(move || service.update_price(&order_number, &product_code, &new_price))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().finish())
}
