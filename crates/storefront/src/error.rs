use rentdesk_traits::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("Product '{0}' is not available for rent")]
    Unavailable(String),

    #[error("Quantity and rental days must be at least 1 (got quantity {quantity}, days {days})")]
    InvalidAmount { quantity: u32, days: u32 },

    #[error("Failed to persist cart: {0}")]
    Store(#[from] StoreError),

    #[error("Failed to serialize cart: {0}")]
    Serialize(#[from] serde_json::Error),
}
