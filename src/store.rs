/// Cart store: the in-memory cart mirrored to storage and the page badges

use crate::badge::{BadgeRenderer, BadgeView};
use crate::cart::{Cart, CartProduct};
use crate::error::CartError;
use crate::storage::{load_cart, save_cart, CartStorage};

/// Owns the cart. Every mutation is persisted and the badges refreshed
/// before the mutating call returns.
pub struct CartStore<S, B> {
    cart: Cart,
    storage: S,
    badge: B,
    key: String,
}

impl<S: CartStorage, B: BadgeRenderer> CartStore<S, B> {
    pub fn new(storage: S, badge: B, key: impl Into<String>) -> Self {
        CartStore {
            cart: Cart::new(),
            storage,
            badge,
            key: key.into(),
        }
    }

    /// Replace the in-memory cart with the stored one.
    pub fn hydrate(&mut self) {
        self.cart = load_cart(&self.storage, &self.key);
        log::debug!("Hydrated cart with {} line items", self.cart.len());
        self.refresh_badge();
    }

    /// Add `quantity` units of `product`, merging with an existing line for
    /// the same product id.
    ///
    /// Storage failures are logged; the in-memory cart and the badges still
    /// reflect the addition.
    pub fn add_item(&mut self, product: CartProduct, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity(quantity));
        }

        log::debug!("Adding {}x product {}", quantity, product.product_id);
        self.cart.add(product, quantity);

        if let Err(e) = self.persist() {
            log::warn!("Cart not saved: {}", e);
        }

        Ok(())
    }

    /// Write the cart to storage, then refresh the badges. The badges are
    /// refreshed even when the write fails.
    pub fn persist(&self) -> Result<(), CartError> {
        let result = save_cart(&self.storage, &self.key, &self.cart);
        self.refresh_badge();
        result
    }

    pub fn refresh_badge(&self) {
        self.badge.render(BadgeView::from_cart(&self.cart));
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn badge(&self) -> &B {
        &self.badge
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingBadge {
        views: RefCell<Vec<BadgeView>>,
    }

    impl RecordingBadge {
        fn last(&self) -> Option<BadgeView> {
            self.views.borrow().last().copied()
        }

        fn count(&self) -> usize {
            self.views.borrow().len()
        }
    }

    impl BadgeRenderer for RecordingBadge {
        fn render(&self, view: BadgeView) {
            self.views.borrow_mut().push(view);
        }
    }

    struct FailingStorage;

    impl CartStorage for FailingStorage {
        fn read(&self, _key: &str) -> Result<Option<String>, CartError> {
            Ok(None)
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), CartError> {
            Err(CartError::StorageWrite("QuotaExceededError".to_string()))
        }
    }

    fn kopi() -> CartProduct {
        CartProduct {
            product_id: "7".to_string(),
            name: "Kopi".to_string(),
            price: 15000,
            image: "kopi.jpg".to_string(),
        }
    }

    fn create_store() -> CartStore<MemoryStorage, RecordingBadge> {
        CartStore::new(MemoryStorage::new(), RecordingBadge::default(), "cart")
    }

    #[test]
    fn test_hydrate_empty_refreshes_badge() {
        let mut store = create_store();

        store.hydrate();

        assert!(store.cart().is_empty());
        assert_eq!(store.badge().last(), Some(BadgeView { total: 0 }));
    }

    #[test]
    fn test_hydrate_malformed_is_empty() {
        let storage = MemoryStorage::with_entry("cart", "[{\"productId\":");
        let mut store = CartStore::new(storage, RecordingBadge::default(), "cart");

        store.hydrate();

        assert!(store.cart().is_empty());
        assert_eq!(store.badge().count(), 1);
    }

    #[test]
    fn test_add_item_merges_example() {
        let mut store = create_store();
        store.hydrate();

        store.add_item(kopi(), 2).unwrap();
        store
            .add_item(CartProduct { product_id: "7".to_string(), ..Default::default() }, 1)
            .unwrap();

        assert_eq!(store.cart().get("7").map(|item| item.quantity), Some(3));
        assert_eq!(store.cart().len(), 1);
        assert_eq!(store.cart().items()[0].product_id, "7");
    }

    #[test]
    fn test_add_item_persists_and_refreshes() {
        let mut store = create_store();

        store.add_item(kopi(), 2).unwrap();

        let stored = store.storage().get("cart").unwrap();
        let reloaded: Cart = serde_json::from_str(&stored).unwrap();
        assert_eq!(&reloaded, store.cart());
        assert_eq!(store.badge().last(), Some(BadgeView { total: 2 }));
    }

    #[test]
    fn test_add_item_rejects_zero_quantity() {
        let mut store = create_store();

        let result = store.add_item(kopi(), 0);

        assert!(matches!(result, Err(CartError::InvalidQuantity(0))));
        assert!(store.cart().is_empty());
        assert!(store.storage().get("cart").is_none());
    }

    #[test]
    fn test_persisted_cart_hydrates_equivalent() {
        let mut store = create_store();
        store.add_item(kopi(), 2).unwrap();
        store
            .add_item(
                CartProduct {
                    product_id: "8".to_string(),
                    name: "Teh".to_string(),
                    price: 8000,
                    image: "teh.jpg".to_string(),
                },
                4,
            )
            .unwrap();

        let stored = store.storage().get("cart").unwrap();
        let mut reopened = CartStore::new(
            MemoryStorage::with_entry("cart", &stored),
            RecordingBadge::default(),
            "cart",
        );
        reopened.hydrate();

        assert_eq!(reopened.cart(), store.cart());
        assert_eq!(reopened.badge().last(), Some(BadgeView { total: 6 }));
    }

    #[test]
    fn test_storage_failure_still_updates_badge() {
        let mut store = CartStore::new(FailingStorage, RecordingBadge::default(), "cart");

        store.add_item(kopi(), 1).unwrap();

        assert_eq!(store.cart().total_quantity(), 1);
        assert_eq!(store.badge().last(), Some(BadgeView { total: 1 }));
        assert!(store.persist().is_err());
    }

    #[test]
    fn test_badge_total_tracks_every_mutation() {
        let mut store = create_store();
        store.hydrate();

        for qty in [1, 2, 3] {
            store.add_item(kopi(), qty).unwrap();
        }

        let totals: Vec<u64> = store.badge().views.borrow().iter().map(|v| v.total).collect();
        assert_eq!(totals, vec![0, 1, 3, 6]);
    }
}
