//! PDF renderer for report exports using lopdf.
//!
//! Two layouts are supported: a paginated table built from tabular rows, and
//! a captured element image sliced across pages. Both share the branding band,
//! footer template and generation timestamp.

mod canvas;
mod decorations;
pub mod helpers;
mod renderer;
pub mod slicing;
mod table;
mod writer;

pub use renderer::PdfRenderer;
pub use slicing::image_slice_offsets;
pub use writer::{ImageHandle, PdfDocumentWriter};
