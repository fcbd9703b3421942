//! Cart operations.
//!
//! There is a single cart shared by every client.

use super::{
    helpers::merge_into_cart,
    models::{CartItem, QuantityUpdate},
};
use crate::{
    error::{Entity, ShopError},
    shop::Shop,
};
use std::convert::Infallible;

impl Shop {
    pub fn view_cart(&self) -> Vec<CartItem> {
        self.snapshot().cart.clone()
    }

    /// Adds `quantity` units of a product and returns the resulting cart.
    ///
    /// The stock check compares `quantity` with the product's recorded stock
    /// only. Units already in the cart are not counted, and incrementing an
    /// existing line is not re-checked.
    pub fn add_to_cart(&self, product_id: u64, quantity: i64) -> Result<Vec<CartItem>, ShopError> {
        let cart = self.transact::<_, ShopError>(|state| {
            let product = state
                .product(product_id)
                .cloned()
                .ok_or(ShopError::NotFound(Entity::Product))?;
            if product.stock < quantity {
                return Err(ShopError::InsufficientStock);
            }

            let mut cart = std::mem::take(&mut state.cart);
            merge_into_cart(&mut cart, &product, quantity, || state.allocate_cart_item_id());
            state.cart = cart;
            Ok(state.cart.clone())
        })?;
        tracing::info!(product_id, quantity, lines = cart.len(), "Added to cart");
        Ok(cart)
    }

    /// Sets the quantity of cart line `id`; zero or less removes the line.
    pub fn update_cart_item(
        &self,
        id: u64,
        quantity: i64,
    ) -> Result<(QuantityUpdate, Vec<CartItem>), ShopError> {
        let (outcome, cart) = self.transact::<_, ShopError>(|state| {
            let item = state
                .cart
                .iter_mut()
                .find(|i| i.id == id)
                .ok_or(ShopError::NotFound(Entity::CartItem))?;

            let outcome = if quantity <= 0 {
                state.cart.retain(|i| i.id != id);
                QuantityUpdate::Removed
            } else {
                item.quantity = quantity;
                QuantityUpdate::Updated
            };
            Ok((outcome, state.cart.clone()))
        })?;
        tracing::info!(cart_item_id = id, quantity, ?outcome, "Cart line updated");
        Ok((outcome, cart))
    }

    /// Removes cart line `id` if present and returns the resulting cart.
    pub fn remove_cart_item(&self, id: u64) -> Vec<CartItem> {
        self.transact::<_, Infallible>(|state| {
            state.cart.retain(|i| i.id != id);
            Ok(state.cart.clone())
        })
        .unwrap_or_else(|never| match never {})
    }

    pub fn clear_cart(&self) {
        self.transact::<_, Infallible>(|state| {
            state.cart.clear();
            Ok(())
        })
        .unwrap_or_else(|never| match never {});
        tracing::info!("Cart cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::products::models::NewProduct;

    /// Shop holding a single product (id 1) priced 10.
    fn shop_with_stock(stock: i64) -> Shop {
        let shop = Shop::with_state(Default::default());
        shop.create_product(NewProduct {
            name: "Widget".into(),
            price: 10.0,
            stock,
            ..Default::default()
        });
        shop
    }

    #[test]
    fn quantity_above_stock_is_rejected_and_cart_unchanged() {
        let shop = shop_with_stock(5);
        shop.add_to_cart(1, 2).unwrap();

        assert_eq!(shop.add_to_cart(1, 6), Err(ShopError::InsufficientStock));

        let cart = shop.view_cart();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, 2);
    }

    #[test]
    fn adding_same_product_twice_merges_lines() {
        let shop = shop_with_stock(5);
        shop.add_to_cart(1, 2).unwrap();
        let cart = shop.add_to_cart(1, 3).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, 5);
    }

    #[test]
    fn increments_are_checked_against_total_stock_only() {
        let shop = shop_with_stock(5);
        shop.add_to_cart(1, 4).unwrap();
        let cart = shop.add_to_cart(1, 4).unwrap();

        assert_eq!(cart[0].quantity, 8);
    }

    #[test]
    fn unknown_product_is_not_found() {
        let shop = shop_with_stock(5);
        assert_eq!(
            shop.add_to_cart(42, 1),
            Err(ShopError::NotFound(Entity::Product))
        );
        assert!(shop.view_cart().is_empty());
    }

    #[test]
    fn non_positive_quantity_removes_only_that_line() {
        let shop = Shop::new();
        shop.add_to_cart(1, 1).unwrap();
        shop.add_to_cart(2, 1).unwrap();

        let (outcome, cart) = shop.update_cart_item(1, 0).unwrap();

        assert_eq!(outcome, QuantityUpdate::Removed);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].product_id, 2);
        assert_eq!(cart[0].quantity, 1);
    }

    #[test]
    fn negative_quantity_removes_only_that_line() {
        let shop = Shop::new();
        shop.add_to_cart(1, 2).unwrap();
        shop.add_to_cart(2, 1).unwrap();
        shop.add_to_cart(3, 4).unwrap();

        let (outcome, cart) = shop.update_cart_item(2, -3).unwrap();

        assert_eq!(outcome, QuantityUpdate::Removed);
        assert_eq!(outcome.message(), "Item removed from cart");
        let lines: Vec<(u64, i64)> = cart.iter().map(|i| (i.product_id, i.quantity)).collect();
        assert_eq!(lines, vec![(1, 2), (3, 4)]);
        assert_eq!(shop.view_cart(), cart);
    }

    #[test]
    fn positive_quantity_is_set_without_stock_check() {
        let shop = shop_with_stock(5);
        shop.add_to_cart(1, 1).unwrap();

        let (outcome, cart) = shop.update_cart_item(1, 50).unwrap();

        assert_eq!(outcome, QuantityUpdate::Updated);
        assert_eq!(cart[0].quantity, 50);
    }

    #[test]
    fn updating_unknown_line_is_not_found() {
        let shop = shop_with_stock(5);
        assert_eq!(
            shop.update_cart_item(1, 2),
            Err(ShopError::NotFound(Entity::CartItem))
        );
    }

    #[test]
    fn line_ids_are_not_reused_after_removal() {
        let shop = Shop::new();
        shop.add_to_cart(1, 1).unwrap();
        shop.add_to_cart(2, 1).unwrap();
        shop.remove_cart_item(1);

        let cart = shop.add_to_cart(3, 1).unwrap();
        let ids: Vec<u64> = cart.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn removing_missing_line_is_a_no_op() {
        let shop = Shop::new();
        assert!(shop.remove_cart_item(1).is_empty());

        shop.add_to_cart(1, 1).unwrap();
        assert_eq!(shop.remove_cart_item(99).len(), 1);
    }

    #[test]
    fn clear_empties_the_cart() {
        let shop = Shop::new();
        shop.add_to_cart(1, 1).unwrap();
        shop.clear_cart();
        assert!(shop.view_cart().is_empty());
    }
}
