//! Product directory operations.

use super::models::{NewProduct, Product, ProductPatch};
use crate::{
    error::{Entity, ShopError},
    shop::Shop,
};
use std::convert::Infallible;

impl Shop {
    /// All products in insertion order.
    pub fn list_products(&self) -> Vec<Product> {
        self.snapshot().products.clone()
    }

    pub fn get_product(&self, id: u64) -> Result<Product, ShopError> {
        self.snapshot()
            .product(id)
            .cloned()
            .ok_or(ShopError::NotFound(Entity::Product))
    }

    pub fn create_product(&self, input: NewProduct) -> Product {
        let product = self
            .transact::<_, Infallible>(|state| {
                let product = input.clone().into_product(state.allocate_product_id());
                state.products.push(product.clone());
                Ok(product)
            })
            .unwrap_or_else(|never| match never {});
        tracing::info!(product_id = product.id, name = %product.name, "Product created");
        product
    }

    pub fn update_product(&self, id: u64, patch: ProductPatch) -> Result<Product, ShopError> {
        let product = self.transact::<_, ShopError>(|state| {
            let product = state
                .product_mut(id)
                .ok_or(ShopError::NotFound(Entity::Product))?;
            product.apply(patch.clone());
            Ok(product.clone())
        })?;
        tracing::info!(product_id = id, "Product updated");
        Ok(product)
    }

    /// Removes the product. Cart lines and orders keep their snapshots.
    pub fn delete_product(&self, id: u64) -> Result<(), ShopError> {
        self.transact::<_, ShopError>(|state| {
            let index = state
                .products
                .iter()
                .position(|p| p.id == id)
                .ok_or(ShopError::NotFound(Entity::Product))?;
            state.products.remove(index);
            Ok(())
        })?;
        tracing::info!(product_id = id, "Product deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mug() -> NewProduct {
        NewProduct {
            name: "Mug".into(),
            price: 8.5,
            stock: 4,
            ..Default::default()
        }
    }

    #[test]
    fn get_returns_latest_version() {
        let shop = Shop::new();
        let created = shop.create_product(mug());
        assert_eq!(shop.get_product(created.id).unwrap(), created);

        let patch = ProductPatch {
            stock: Some(9),
            ..Default::default()
        };
        let updated = shop.update_product(created.id, patch).unwrap();
        assert_eq!(updated.stock, 9);
        assert_eq!(shop.get_product(created.id).unwrap(), updated);

        shop.delete_product(created.id).unwrap();
        assert_eq!(
            shop.get_product(created.id),
            Err(ShopError::NotFound(Entity::Product))
        );
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let shop = Shop::new();
        shop.delete_product(3).unwrap();

        let created = shop.create_product(mug());

        assert_eq!(created.id, 4);
        let ids: Vec<u64> = shop.list_products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[test]
    fn delete_keeps_order_of_remaining_products() {
        let shop = Shop::new();
        shop.delete_product(1).unwrap();

        let names: Vec<String> = shop.list_products().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Smartphone", "Running Shoes"]);
    }

    #[test]
    fn unknown_product_is_not_found() {
        let shop = Shop::new();
        let not_found = ShopError::NotFound(Entity::Product);

        assert_eq!(shop.get_product(999).unwrap_err(), not_found);
        assert_eq!(
            shop.update_product(999, ProductPatch::default()).unwrap_err(),
            not_found
        );
        assert_eq!(shop.delete_product(999).unwrap_err(), not_found);
    }
}
