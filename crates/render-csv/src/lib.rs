//! CSV renderer for report exports.
//!
//! Output is UTF-8 with `\r\n` line endings. Fields are quoted only when they
//! contain a comma, a double quote, CR or LF.

mod escape;
mod renderer;

pub use escape::{escape_field, split_record};
pub use renderer::CsvRenderer;
