//! Error handling for the shop API.
//!
//! Every failure a handler can report is a [`ShopError`]. It is converted to a
//! JSON `{"message": ...}` body with a 4xx status at the HTTP boundary.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain errors raised by shop operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShopError {
    /// The referenced entity id does not exist.
    #[error("{0} not found")]
    NotFound(Entity),

    /// The requested cart quantity exceeds the product's recorded stock.
    #[error("Insufficient stock")]
    InsufficientStock,

    /// An order was requested while the cart has no lines.
    #[error("Cart is empty")]
    EmptyCart,

    /// The request body could not be used.
    #[error("{0}")]
    InvalidBody(String),
}

/// Kind of entity a [`ShopError::NotFound`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Product,
    CartItem,
    Order,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Entity::Product => "Product",
            Entity::CartItem => "Cart item",
            Entity::Order => "Order",
        })
    }
}

impl ShopError {
    pub fn status(&self) -> StatusCode {
        match self {
            ShopError::NotFound(_) => StatusCode::NOT_FOUND,
            ShopError::InsufficientStock | ShopError::EmptyCart | ShopError::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl From<JsonRejection> for ShopError {
    fn from(rejection: JsonRejection) -> Self {
        ShopError::InvalidBody(rejection.body_text())
    }
}

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl IntoResponse for ShopError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(%status, error = %self, "Request rejected");
        (
            status,
            Json(MessageBody {
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
