/// Storage port for the persisted cart (browser localStorage in production)

use crate::cart::Cart;
use crate::error::CartError;
use std::cell::RefCell;
use std::collections::HashMap;

/// Key-value text storage the cart is mirrored into.
pub trait CartStorage {
    fn read(&self, key: &str) -> Result<Option<String>, CartError>;
    fn write(&self, key: &str, value: &str) -> Result<(), CartError>;
}

impl<T: CartStorage + ?Sized> CartStorage for Box<T> {
    fn read(&self, key: &str) -> Result<Option<String>, CartError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), CartError> {
        (**self).write(key, value)
    }
}

/// `window.localStorage`
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self, CartError> {
        let window = web_sys::window()
            .ok_or_else(|| CartError::StorageUnavailable("no window".to_string()))?;

        let storage = window
            .local_storage()
            .map_err(|e| CartError::StorageUnavailable(format!("{:?}", e)))?
            .ok_or_else(|| CartError::StorageUnavailable("localStorage is disabled".to_string()))?;

        Ok(LocalStorage { storage })
    }
}

impl CartStorage for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, CartError> {
        self.storage
            .get_item(key)
            .map_err(|e| CartError::StorageUnavailable(format!("{:?}", e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), CartError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| CartError::StorageWrite(format!("{:?}", e)))
    }
}

/// In-process storage, used when localStorage is unavailable and in tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.entries.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl CartStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, CartError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), CartError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read the cart stored under `key`. Missing, unreadable or malformed data
/// yields an empty cart.
pub fn load_cart<S: CartStorage + ?Sized>(storage: &S, key: &str) -> Cart {
    let raw = match storage.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Cart::new(),
        Err(e) => {
            log::warn!("Could not read stored cart: {}", e);
            return Cart::new();
        }
    };

    serde_json::from_str(&raw).unwrap_or_else(|e| {
        log::warn!("Discarding malformed stored cart: {}", e);
        Cart::new()
    })
}

/// Serialize the whole cart under `key`.
pub fn save_cart<S: CartStorage + ?Sized>(storage: &S, key: &str, cart: &Cart) -> Result<(), CartError> {
    let json = serde_json::to_string(cart)?;
    storage.write(key, &json)
}
