/// Cart error types

use thiserror::Error;

/// Errors that can occur while mutating or persisting the cart.
#[derive(Error, Debug)]
pub enum CartError {
    /// A line item needs at least one unit.
    #[error("Quantity must be at least 1, got {0}")]
    InvalidQuantity(u32),

    /// Browser storage could not be opened.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Browser storage rejected a write (quota, privacy mode).
    #[error("Storage write failed: {0}")]
    StorageWrite(String),

    /// Failed to serialize the cart.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
