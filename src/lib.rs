//! E-commerce API Library
//!
//! This library provides an in-memory e-commerce backend: a product
//! directory, a shopping cart and orders, served over a JSON REST API.

// Domain modules
pub mod cart;
pub mod orders;
pub mod products;
pub mod shop;

// Infrastructure
pub mod config;
pub mod error;
pub mod helpers;
pub mod router;
