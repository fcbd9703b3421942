//! Product Domain Models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// Product
// =============================================================================

/// A catalogue entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: u64,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub price: f64,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub category: String,

    /// Reference to the product image (a path or URL).
    #[serde(default)]
    pub image: String,

    /// Units available. Orders decrement it without a floor.
    #[serde(default)]
    pub stock: i64,

    /// Fields merged in by updates that are not part of the catalogue schema.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Overwrites every field present in `patch`, keeping the rest.
    pub fn apply(&mut self, patch: ProductPatch) {
        let ProductPatch {
            name,
            price,
            description,
            category,
            image,
            stock,
            extra,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(image) = image {
            self.image = image;
        }
        if let Some(stock) = stock {
            self.stock = stock;
        }
        // The identifier is owned by the catalogue.
        self.extra
            .extend(extra.into_iter().filter(|(key, _)| key != "id"));
    }
}

// =============================================================================
// Inputs
// =============================================================================

/// Body of `POST /api/products`. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub stock: i64,
}

impl NewProduct {
    pub fn into_product(self, id: u64) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            description: self.description,
            category: self.category,
            image: self.image,
            stock: self.stock,
            extra: Map::new(),
        }
    }
}

/// Body of `PUT /api/products/:id`; every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub stock: Option<i64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn laptop() -> Product {
        NewProduct {
            name: "Laptop".into(),
            price: 999.99,
            stock: 10,
            ..Default::default()
        }
        .into_product(1)
    }

    #[test]
    fn patch_keeps_unspecified_fields() {
        let mut product = laptop();
        let patch: ProductPatch = serde_json::from_value(json!({ "price": 899.0 })).unwrap();

        product.apply(patch);

        assert_eq!(product.price, 899.0);
        assert_eq!(product.name, "Laptop");
        assert_eq!(product.stock, 10);
    }

    #[test]
    fn patch_stores_unknown_fields_but_not_id() {
        let mut product = laptop();
        let patch: ProductPatch =
            serde_json::from_value(json!({ "id": 42, "featured": true, "tags": ["a"] })).unwrap();

        product.apply(patch);

        assert_eq!(product.id, 1);
        let serialized = serde_json::to_value(&product).unwrap();
        assert_eq!(serialized["id"], 1);
        assert_eq!(serialized["featured"], true);
        assert_eq!(serialized["tags"], json!(["a"]));
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let input: NewProduct = serde_json::from_value(json!({ "name": "Mug" })).unwrap();
        let product = input.into_product(7);

        assert_eq!(product.id, 7);
        assert_eq!(product.name, "Mug");
        assert_eq!(product.price, 0.0);
        assert_eq!(product.stock, 0);
        assert!(product.description.is_empty());
    }
}
