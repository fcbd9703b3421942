//! REST API handlers for the product directory

use super::models::{NewProduct, Product, ProductPatch};
use crate::{
    error::{Entity, ShopError},
    helpers::{parse_id, Confirmation},
    shop::SharedState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

/// Creates routes for product-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .route(
            "/api/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

fn product_id(raw: &str) -> Result<u64, ShopError> {
    parse_id(raw).ok_or(ShopError::NotFound(Entity::Product))
}

/// Endpoint: GET /api/products
async fn list_products(State(shop): State<SharedState>) -> Json<Vec<Product>> {
    Json(shop.list_products())
}

/// Endpoint: GET /api/products/:id
async fn get_product(
    State(shop): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ShopError> {
    let product = shop.get_product(product_id(&id)?)?;
    Ok(Json(product))
}

/// Endpoint: POST /api/products
async fn create_product(
    State(shop): State<SharedState>,
    body: Result<Json<NewProduct>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ShopError> {
    let Json(input) = body?;
    Ok((StatusCode::CREATED, Json(shop.create_product(input))))
}

/// Endpoint: PUT /api/products/:id
/// Shallow merge: fields missing from the body are kept.
async fn update_product(
    State(shop): State<SharedState>,
    Path(id): Path<String>,
    body: Result<Json<ProductPatch>, JsonRejection>,
) -> Result<Json<Product>, ShopError> {
    let id = product_id(&id)?;
    let Json(patch) = body?;
    Ok(Json(shop.update_product(id, patch)?))
}

/// Endpoint: DELETE /api/products/:id
async fn delete_product(
    State(shop): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Confirmation>, ShopError> {
    shop.delete_product(product_id(&id)?)?;
    Ok(Json(Confirmation::new("Product deleted successfully")))
}
