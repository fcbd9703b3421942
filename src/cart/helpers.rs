//! Shopping Cart Business Logic Helpers
//!
//! This module contains helper functions for cart operations and formatting.

use super::models::CartItem;
use crate::products::models::Product;

/// Merges `quantity` units of `product` into `cart`.
///
/// # Behaviour
///
/// * If a line for the same product already exists, its `quantity` is
///   increased by the incoming quantity. The line keeps its original product
///   snapshot.
/// * Otherwise a new line is appended with the id produced by `next_id` and a
///   copy of `product`.
/// * A line whose quantity ends up at zero or below is dropped.
///
/// This function mutates `cart` in-place.
pub fn merge_into_cart(
    cart: &mut Vec<CartItem>,
    product: &Product,
    quantity: i64,
    next_id: impl FnOnce() -> u64,
) {
    if let Some(existing) = cart.iter_mut().find(|i| i.product_id == product.id) {
        existing.quantity += quantity;
    } else {
        cart.push(CartItem {
            id: next_id(),
            product_id: product.id,
            quantity,
            product: product.clone(),
        });
    }
    cart.retain(|i| i.quantity > 0);
}

/// Sum of every line's subtotal.
pub fn cart_total(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::subtotal).sum()
}

/// Produces a human-readable one-line summary for a list of cart lines.
///
/// Example output: `"2x Laptop, 1x Smartphone"`.
pub fn format_item_summary(items: &[CartItem]) -> String {
    items
        .iter()
        .map(|i| format!("{}x {}", i.quantity, i.product.name))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::products::models::NewProduct;

    fn product(id: u64, name: &str, price: f64) -> Product {
        NewProduct {
            name: name.into(),
            price,
            stock: 10,
            ..Default::default()
        }
        .into_product(id)
    }

    #[test]
    fn merging_same_product_aggregates_quantity() {
        let apple = product(1, "Apple", 0.5);
        let mut cart = Vec::new();

        merge_into_cart(&mut cart, &apple, 2, || 1);
        merge_into_cart(&mut cart, &apple, 3, || 2);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].id, 1);
        assert_eq!(cart[0].quantity, 5);
    }

    #[test]
    fn merging_new_product_appends_line() {
        let mut cart = Vec::new();
        merge_into_cart(&mut cart, &product(1, "Apple", 0.5), 1, || 1);
        merge_into_cart(&mut cart, &product(2, "Banana", 0.25), 4, || 2);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart[1].product_id, 2);
        assert_eq!(cart[1].product.name, "Banana");
    }

    #[test]
    fn non_positive_lines_are_dropped() {
        let apple = product(1, "Apple", 0.5);
        let mut cart = Vec::new();
        merge_into_cart(&mut cart, &apple, 2, || 1);

        merge_into_cart(&mut cart, &apple, -2, || 2);
        assert!(cart.is_empty());

        merge_into_cart(&mut cart, &apple, 0, || 3);
        assert!(cart.is_empty());
    }

    #[test]
    fn total_and_summary() {
        let mut cart = Vec::new();
        merge_into_cart(&mut cart, &product(1, "Apple", 0.5), 2, || 1);
        merge_into_cart(&mut cart, &product(2, "Banana", 0.25), 1, || 2);

        assert_eq!(cart_total(&cart), 1.25);
        assert_eq!(format_item_summary(&cart), "2x Apple, 1x Banana");
    }
}
