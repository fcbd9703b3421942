//! Shop Service Module
//!
//! The [`Shop`] owns the storage of all three collections and exposes the
//! product, cart and order operations (implemented in their own domain
//! modules). Handlers receive it through axum state, never through globals.

pub mod seed;
pub mod state;

use std::sync::Arc;

pub use state::{InMemoryStorage, ShopState, Storage};

/// Shared service handle passed to every handler.
pub type SharedState = Arc<Shop>;

/// Service object owning the injected [`Storage`].
pub struct Shop {
    storage: Arc<dyn Storage>,
}

impl Default for Shop {
    fn default() -> Self {
        Self::new()
    }
}

impl Shop {
    /// Creates an in-memory shop seeded with the fixture catalogue.
    pub fn new() -> Self {
        Self::with_state(ShopState::with_products(seed::fixture_products()))
    }

    /// Creates an in-memory shop starting from `state`.
    pub fn with_state(state: ShopState) -> Self {
        Self::with_storage(Arc::new(InMemoryStorage::new(state)))
    }

    pub fn with_storage(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Current snapshot of every collection.
    pub fn snapshot(&self) -> Arc<ShopState> {
        self.storage.load()
    }

    /// Runs `apply` as one all-or-nothing transaction.
    ///
    /// `apply` works on a private copy of the current state. An `Err` discards
    /// the copy. An `Ok` publishes it, unless another writer committed first,
    /// in which case `apply` runs again against the newer state.
    pub(crate) fn transact<T, E>(
        &self,
        apply: impl Fn(&mut ShopState) -> Result<T, E>,
    ) -> Result<T, E> {
        loop {
            let current = self.storage.load();
            let mut next = (*current).clone();
            let output = apply(&mut next)?;
            next.version = current.version + 1;

            if self.storage.compare_and_swap(&current, next) {
                return Ok(output);
            }
            tracing::debug!(version = current.version, "Lost commit race, retrying");
        }
    }
}
