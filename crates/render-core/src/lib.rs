//! Core rendering abstractions for report exports.
//!
//! This crate provides what every output format shares:
//! - `TabularRenderer` trait implemented by the PDF, XLSX and CSV backends
//! - `RenderContext` carrying the clock and locale formats of one export
//! - Error types for rendering operations
//! - Header and cell formatting helpers

mod error;
mod traits;
mod types;
pub mod utils;

pub use error::RenderError;
pub use traits::TabularRenderer;
pub use types::{RenderContext, RenderedFile, DEFAULT_DATE_FORMAT, DEFAULT_TIMESTAMP_FORMAT};
