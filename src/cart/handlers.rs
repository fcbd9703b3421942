//! REST API handlers for shopping cart operations
//!
//! Every mutation answers with a confirmation message and, except for
//! clearing, the full cart as it stands afterwards.

use super::models::*;
use crate::{
    error::{Entity, ShopError},
    helpers::{json_or_default, parse_id, Confirmation},
    shop::SharedState,
};
use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, Path, State},
    http::HeaderMap,
    routing::{get, put},
    Json, Router,
};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route(
            "/api/cart",
            get(view_cart).post(add_to_cart).delete(clear_cart),
        )
        .route("/api/cart/:id", put(update_cart_item).delete(remove_cart_item))
}

/// Endpoint: GET /api/cart
async fn view_cart(State(shop): State<SharedState>) -> Json<Vec<CartItem>> {
    Json(shop.view_cart())
}

/// Endpoint: POST /api/cart
/// A body that is missing or not JSON names no product.
async fn add_to_cart(
    State(shop): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<CartResponse>, ShopError> {
    let input: AddToCartInput = json_or_default(&headers, &body)?;
    let product_id = input
        .product_id
        .ok_or(ShopError::NotFound(Entity::Product))?;
    let cart = shop.add_to_cart(product_id, input.quantity)?;

    Ok(Json(CartResponse {
        message: "Product added to cart",
        cart,
    }))
}

/// Endpoint: PUT /api/cart/:id
async fn update_cart_item(
    State(shop): State<SharedState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateCartItemInput>, JsonRejection>,
) -> Result<Json<CartResponse>, ShopError> {
    let id = parse_id(&id).ok_or(ShopError::NotFound(Entity::CartItem))?;
    let Json(input) = body?;
    let quantity = input
        .quantity
        .ok_or_else(|| ShopError::InvalidBody("quantity is required".into()))?;
    let (outcome, cart) = shop.update_cart_item(id, quantity)?;

    Ok(Json(CartResponse {
        message: outcome.message(),
        cart,
    }))
}

/// Endpoint: DELETE /api/cart/:id
/// Removing a line that does not exist still succeeds.
async fn remove_cart_item(
    State(shop): State<SharedState>,
    Path(id): Path<String>,
) -> Json<CartResponse> {
    let cart = match parse_id(&id) {
        Some(id) => shop.remove_cart_item(id),
        None => shop.view_cart(),
    };

    Json(CartResponse {
        message: "Item removed from cart",
        cart,
    })
}

/// Endpoint: DELETE /api/cart
async fn clear_cart(State(shop): State<SharedState>) -> Json<Confirmation> {
    shop.clear_cart();
    Json(Confirmation::new("Cart cleared"))
}
