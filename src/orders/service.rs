//! Order operations.

use super::models::{Order, PENDING};
use crate::{
    cart::helpers::{cart_total, format_item_summary},
    error::{Entity, ShopError},
    shop::Shop,
};
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;

impl Shop {
    /// All orders in creation order.
    pub fn list_orders(&self) -> Vec<Order> {
        self.snapshot()
            .orders
            .iter()
            .map(|o| Order::clone(o))
            .collect()
    }

    pub fn get_order(&self, id: u64) -> Result<Order, ShopError> {
        self.snapshot()
            .orders
            .iter()
            .find(|o| o.id == id)
            .map(|o| Order::clone(o))
            .ok_or(ShopError::NotFound(Entity::Order))
    }

    /// Turns the cart into an order.
    ///
    /// Recording the order, decrementing the stock of every product still in
    /// the catalogue and emptying the cart are committed together or not at
    /// all.
    pub fn create_order(&self, customer_info: Option<Value>) -> Result<Order, ShopError> {
        let order = self.transact::<_, ShopError>(|state| {
            if state.cart.is_empty() {
                return Err(ShopError::EmptyCart);
            }

            let items = std::mem::take(&mut state.cart);
            for item in &items {
                // Products deleted since the line was added are skipped.
                if let Some(product) = state.product_mut(item.product_id) {
                    product.stock -= item.quantity;
                }
            }

            let order = Order {
                id: state.allocate_order_id(),
                customer_info: customer_info.clone(),
                total: cart_total(&items),
                items,
                status: PENDING.to_string(),
                created_at: Utc::now(),
            };
            Arc::make_mut(&mut state.orders).push(Arc::new(order.clone()));
            Ok(order)
        })?;

        tracing::info!(
            order_id = order.id,
            total = order.total,
            items = %format_item_summary(&order.items),
            "Order created"
        );
        Ok(order)
    }
}
