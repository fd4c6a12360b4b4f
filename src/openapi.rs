use utoipa::OpenApi;

use crate::errors::ErrorResponse;
use crate::handlers::orders::{CountResponse, OrderLineResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::orders::count_orders,
        crate::handlers::orders::get_order,
        crate::handlers::orders::update_price,
    ),
    components(schemas(CountResponse, OrderLineResponse, ErrorResponse)),
    tags((name = "orders", description = "Sales order line items"))
)]
pub struct ApiDoc;
