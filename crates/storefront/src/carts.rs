//! Session-scoped cart registry.
//!
//! Each browsing session owns exactly one [`Cart`], keyed by the [`CartId`]
//! stored in its session. Carts live in a `moka` cache whose idle expiry
//! matches the session expiry, so a cart is discarded together with the
//! session that referenced it. The cache is also bounded by
//! `STOREFRONT_MAX_CARTS`; at that bound carts are evicted early and a warning
//! is logged for each one.
//!
//! Every cart sits behind its own async mutex. Handlers hold the lock for the
//! mutation and the aggregate read that follows, so concurrent requests from
//! the same session are applied one at a time and never observe each other's
//! half-finished updates.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use icanmake3d_core::{Cart, CartId};
use moka::future::Cache;
use moka::notification::RemovalCause;
use tokio::sync::Mutex;

/// Shared handle to one session's cart.
pub type SharedCart = Arc<Mutex<Cart>>;

/// In-memory store of live carts.
#[derive(Clone)]
pub struct CartRegistry {
    carts: Cache<CartId, SharedCart>,
    capacity_evictions: Arc<AtomicU64>,
}

impl CartRegistry {
    /// Create a registry holding at most `max_carts` carts, each dropped
    /// after `idle` without access.
    ///
    /// When the registry is full, moka evicts carts to make room even if
    /// their sessions are still live; the shopper's next request then sees
    /// an empty cart. Each such eviction is logged at warn level.
    #[must_use]
    pub fn new(max_carts: u64, idle: Duration) -> Self {
        let capacity_evictions = Arc::new(AtomicU64::new(0));
        let evictions = Arc::clone(&capacity_evictions);

        let carts = Cache::builder()
            .max_capacity(max_carts)
            .time_to_idle(idle)
            .eviction_listener(move |cart_id: Arc<CartId>, _cart, cause| {
                if cause == RemovalCause::Size {
                    let total = evictions.fetch_add(1, Ordering::Relaxed) + 1;
                    tracing::warn!(
                        cart_id = %cart_id,
                        max_carts,
                        evicted_total = total,
                        "Cart evicted at registry capacity while its session may be live"
                    );
                }
            })
            .build();

        Self {
            carts,
            capacity_evictions,
        }
    }

    /// Get the cart for `id`, creating an empty one on first use.
    pub async fn get_or_create(&self, id: CartId) -> SharedCart {
        self.carts
            .get_with(id, async move { Arc::new(Mutex::new(observed_cart(id))) })
            .await
    }

    /// Get the cart for `id` if one exists.
    pub async fn get(&self, id: CartId) -> Option<SharedCart> {
        self.carts.get(&id).await
    }
}

/// A new cart that traces every change it publishes.
fn observed_cart(id: CartId) -> Cart {
    let mut cart = Cart::new();
    cart.subscribe(move |event, summary| {
        tracing::debug!(
            cart_id = %id,
            ?event,
            total_items = summary.total_items,
            total_price = %summary.total_price,
            "Cart updated"
        );
    });
    cart
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use icanmake3d_core::Catalog;

    use super::*;

    fn registry() -> CartRegistry {
        CartRegistry::new(100, Duration::from_secs(60))
    }

    #[tokio::test]
    async fn test_get_or_create_returns_same_cart() {
        let catalog = Catalog::builtin().unwrap();
        let registry = registry();
        let id = CartId::new();

        registry
            .get_or_create(id)
            .await
            .lock()
            .await
            .add(catalog.shared("1").unwrap());

        let cart = registry.get_or_create(id).await;
        assert!(cart.lock().await.contains("1"));
    }

    #[tokio::test]
    async fn test_sessions_do_not_share_carts() {
        let catalog = Catalog::builtin().unwrap();
        let registry = registry();
        let (first, second) = (CartId::new(), CartId::new());

        registry
            .get_or_create(first)
            .await
            .lock()
            .await
            .add(catalog.shared("1").unwrap());

        let other = registry.get_or_create(second).await;
        assert!(other.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_get_does_not_create() {
        let registry = registry();
        let id = CartId::new();

        assert!(registry.get(id).await.is_none());
        registry.get_or_create(id).await;
        assert!(registry.get(id).await.is_some());
    }

    #[tokio::test]
    async fn test_capacity_eviction_is_counted() {
        let catalog = Catalog::builtin().unwrap();
        let registry = CartRegistry::new(2, Duration::from_secs(600));
        let (first, second) = (CartId::new(), CartId::new());

        for _ in 0..5 {
            registry.get_or_create(first).await;
            registry.get_or_create(second).await;
        }
        registry.carts.run_pending_tasks().await;
        assert_eq!(registry.capacity_evictions.load(Ordering::Relaxed), 0);

        for _ in 0..3 {
            registry
                .get_or_create(CartId::new())
                .await
                .lock()
                .await
                .add(catalog.shared("1").unwrap());
            registry.carts.run_pending_tasks().await;
        }

        assert!(registry.capacity_evictions.load(Ordering::Relaxed) >= 1);
    }
}
