//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to the shopping cart
//! business domain.

use crate::products::models::Product;
use serde::{Deserialize, Serialize};

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Returns the default quantity (1) for cart additions
fn default_quantity() -> i64 {
    1
}

/// Represents a line in the shopping cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Identifier of the cart line itself
    pub id: u64,

    /// Product this line refers to
    pub product_id: u64,

    /// Always positive while the line is stored
    pub quantity: i64,

    /// Copy of the product taken when the line was created
    pub product: Product,
}

impl CartItem {
    /// Price of the line based on the product snapshot.
    pub fn subtotal(&self) -> f64 {
        self.product.price * self.quantity as f64
    }
}

/// Body of `POST /api/cart`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartInput {
    /// Product to add; a missing id matches no product
    pub product_id: Option<u64>,

    /// Quantity to add (defaults to 1)
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

impl Default for AddToCartInput {
    fn default() -> Self {
        Self {
            product_id: None,
            quantity: default_quantity(),
        }
    }
}

/// Body of `PUT /api/cart/:id`
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCartItemInput {
    /// New quantity; zero or less removes the line
    pub quantity: Option<i64>,
}

/// Confirmation returned by cart mutations together with the whole cart
#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub message: &'static str,
    pub cart: Vec<CartItem>,
}

/// What a quantity update did to the targeted line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityUpdate {
    Updated,
    Removed,
}

impl QuantityUpdate {
    pub fn message(self) -> &'static str {
        match self {
            QuantityUpdate::Updated => "Cart updated",
            QuantityUpdate::Removed => "Item removed from cart",
        }
    }
}
