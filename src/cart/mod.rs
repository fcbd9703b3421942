//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (CartItem, inputs, responses)
//! - Business logic helpers (line merging, totals, formatting)
//! - Cart operations on the shop service
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod service;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::CartItem;
