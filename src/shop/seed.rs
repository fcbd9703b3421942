//! Fixture catalogue loaded at process start.

use crate::products::models::Product;

pub fn fixture_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Laptop".into(),
            price: 999.99,
            description: "High-performance laptop for work and gaming".into(),
            category: "Electronics".into(),
            image: "/images/laptop.jpg".into(),
            stock: 10,
            extra: Default::default(),
        },
        Product {
            id: 2,
            name: "Smartphone".into(),
            price: 699.99,
            description: "Latest smartphone with advanced features".into(),
            category: "Electronics".into(),
            image: "/images/smartphone.jpg".into(),
            stock: 15,
            extra: Default::default(),
        },
        Product {
            id: 3,
            name: "Running Shoes".into(),
            price: 129.99,
            description: "Comfortable running shoes for athletes".into(),
            category: "Sports".into(),
            image: "/images/shoes.jpg".into(),
            stock: 20,
            extra: Default::default(),
        },
    ]
}
