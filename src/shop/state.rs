//! Shop State and Storage
//!
//! This module holds the three collections of the shop (products, cart and
//! orders) in a single value, together with the storage abstraction that keeps
//! the current version of that value.

use crate::{cart::models::CartItem, orders::models::Order, products::models::Product};
use arc_swap::ArcSwap;
use std::sync::Arc;

// =============================================================================
// Shop State
// =============================================================================

/// Snapshot of every collection the shop owns.
///
/// Identifier counters live next to the collections they number, so an id
/// handed out once is never handed out again, even after the entity is deleted.
#[derive(Debug, Clone, Default)]
pub struct ShopState {
    /// Products in insertion order.
    pub products: Vec<Product>,

    /// The single global cart.
    pub cart: Vec<CartItem>,

    /// Orders in creation order.
    ///
    /// Placed orders never change, so snapshots share them; a commit that
    /// does not place an order copies only the outer pointer.
    pub orders: Arc<Vec<Arc<Order>>>,

    /// Number of committed transactions that produced this snapshot.
    pub version: u64,

    next_product_id: u64,
    next_cart_item_id: u64,
    next_order_id: u64,
}

impl ShopState {
    /// Builds a state containing `products` and empty cart/orders.
    pub fn with_products(products: Vec<Product>) -> Self {
        let next_product_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            products,
            next_product_id,
            next_cart_item_id: 1,
            next_order_id: 1,
            ..Self::default()
        }
    }

    pub fn allocate_product_id(&mut self) -> u64 {
        allocate(&mut self.next_product_id)
    }

    pub fn allocate_cart_item_id(&mut self) -> u64 {
        allocate(&mut self.next_cart_item_id)
    }

    pub fn allocate_order_id(&mut self) -> u64 {
        allocate(&mut self.next_order_id)
    }

    pub fn product(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn product_mut(&mut self, id: u64) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }
}

fn allocate(counter: &mut u64) -> u64 {
    // A state built through `Default` starts its counters at 0.
    let id = (*counter).max(1);
    *counter = id + 1;
    id
}

// =============================================================================
// Storage
// =============================================================================

/// Holder of the current [`ShopState`].
///
/// Readers get an immutable snapshot. Writers publish a new snapshot only if
/// the one they started from is still current, which makes every write an
/// all-or-nothing transaction.
pub trait Storage: Send + Sync {
    /// Returns the current snapshot.
    fn load(&self) -> Arc<ShopState>;

    /// Replaces `current` with `next`.
    ///
    /// Returns `false` without touching anything when another writer has
    /// committed since `current` was loaded.
    fn compare_and_swap(&self, current: &Arc<ShopState>, next: ShopState) -> bool;
}

/// Process-memory storage; everything is lost at exit.
pub struct InMemoryStorage {
    state: ArcSwap<ShopState>,
}

impl InMemoryStorage {
    pub fn new(initial: ShopState) -> Self {
        Self {
            state: ArcSwap::from_pointee(initial),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new(ShopState::default())
    }
}

impl Storage for InMemoryStorage {
    fn load(&self) -> Arc<ShopState> {
        self.state.load_full()
    }

    fn compare_and_swap(&self, current: &Arc<ShopState>, next: ShopState) -> bool {
        let previous = self.state.compare_and_swap(current, Arc::new(next));
        Arc::ptr_eq(&*previous, current)
    }
}
