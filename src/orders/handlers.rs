//! REST API handlers for orders

use super::models::{CreateOrderInput, Order, OrderCreated};
use crate::{
    error::{Entity, ShopError},
    helpers::{json_or_default, parse_id},
    shop::SharedState,
};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};

/// Creates routes for order-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/orders", get(list_orders).post(create_order))
        .route("/api/orders/:id", get(get_order))
}

/// Endpoint: GET /api/orders
async fn list_orders(State(shop): State<SharedState>) -> Json<Vec<Order>> {
    Json(shop.list_orders())
}

/// Endpoint: GET /api/orders/:id
async fn get_order(
    State(shop): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Order>, ShopError> {
    let id = parse_id(&id).ok_or(ShopError::NotFound(Entity::Order))?;
    Ok(Json(shop.get_order(id)?))
}

/// Endpoint: POST /api/orders
/// Places an order from the current cart. A request without a JSON body is
/// treated as one without customer details.
async fn create_order(
    State(shop): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<OrderCreated>), ShopError> {
    let input: CreateOrderInput = json_or_default(&headers, &body)?;
    let order = shop.create_order(input.customer_info)?;

    Ok((
        StatusCode::CREATED,
        Json(OrderCreated {
            message: "Order created successfully",
            order,
        }),
    ))
}
