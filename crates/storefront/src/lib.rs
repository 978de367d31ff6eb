//! Storefront state: the product catalog query and the rental cart.

mod cart;
mod catalog;
mod error;
mod product;

pub use cart::{CART_KEY, Cart, CartItem};
pub use catalog::{Availability, DEFAULT_LIMIT, Page, ProductFilter, SortOrder, query};
pub use error::CartError;
pub use product::Product;
