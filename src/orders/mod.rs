//! Orders Domain Module
//!
//! - Domain models (Order, creation input and response)
//! - Order operations on the shop service
//! - REST API handlers

pub mod handlers;
pub mod models;
pub mod service;

pub use handlers::routes;
pub use models::Order;
