use crate::error::CartError;
use crate::product::Product;
use rentdesk_traits::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const CART_KEY: &str = "cart";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
    pub days: u32,
}

/// The rental cart, persisted under [`CART_KEY`] after every change.
///
/// Persisting happens after the in-memory change; a failed write is returned
/// but the change stays applied.
#[derive(Debug)]
pub struct Cart {
    storage: Arc<dyn KeyValueStore>,
    items: Vec<CartItem>,
}

impl Cart {
    /// Rehydrates the cart. Missing or malformed data yields an empty cart.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let items = match storage.get(CART_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("Discarding malformed cart: {}", e);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Could not read cart: {}", e);
                Vec::new()
            }
        };
        Self { storage, items }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn item(&self, product_id: u64) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }

    /// Adds a product. An item already in the cart gets the quantity added
    /// and its rental days replaced.
    pub fn add_item(&mut self, product: Product, quantity: u32, days: u32) -> Result<(), CartError> {
        if !product.is_available {
            log::warn!("'{}' is not available for rent", product.name);
            return Err(CartError::Unavailable(product.name));
        }
        if quantity == 0 || days == 0 {
            return Err(CartError::InvalidAmount { quantity, days });
        }

        match self.items.iter_mut().find(|i| i.product.id == product.id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(quantity);
                existing.days = days;
                log::info!("{} ({} pcs, {} days) updated in cart", product.name, quantity, days);
            }
            None => {
                log::info!("{} ({} pcs, {} days) added to cart", product.name, quantity, days);
                self.items.push(CartItem {
                    product,
                    quantity,
                    days,
                });
            }
        }
        self.persist()
    }

    pub fn remove_item(&mut self, product_id: u64) -> Result<(), CartError> {
        if let Some(item) = self.item(product_id) {
            log::info!("{} removed from cart", item.product.name);
        }
        self.items.retain(|i| i.product.id != product_id);
        self.persist()
    }

    /// Sets the quantity; zero or less removes the item.
    pub fn update_item_quantity(&mut self, product_id: u64, quantity: i64) -> Result<(), CartError> {
        if quantity <= 0 {
            return self.remove_item(product_id);
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = quantity;
        }
        self.persist()
    }

    /// Sets the rental days; zero or less removes the item.
    pub fn update_item_days(&mut self, product_id: u64, days: i64) -> Result<(), CartError> {
        if days <= 0 {
            return self.remove_item(product_id);
        }
        let days = u32::try_from(days).unwrap_or(u32::MAX);
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.days = days;
        }
        self.persist()
    }

    pub fn clear(&mut self) -> Result<(), CartError> {
        self.items.clear();
        log::info!("Cart cleared");
        self.persist()
    }

    /// Total number of units across all items.
    pub fn items_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Rental total with per-product discounts applied.
    pub fn total_price(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.product.rental_price(i.quantity, i.days))
            .sum()
    }

    pub fn total_deposit(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.product.deposit * f64::from(i.quantity))
            .sum()
    }

    fn persist(&self) -> Result<(), CartError> {
        let json = serde_json::to_string(&self.items)?;
        self.storage.set(CART_KEY, &json).map_err(|e| {
            log::error!("Failed to persist cart: {}", e);
            CartError::from(e)
        })
    }
}
