//! Product Directory Module
//!
//! - Domain models (Product, creation and update inputs)
//! - Directory operations on the shop service
//! - REST API handlers

pub mod handlers;
pub mod models;
pub mod service;

pub use handlers::routes;
pub use models::Product;
