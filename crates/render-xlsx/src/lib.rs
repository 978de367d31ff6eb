//! XLSX renderer for report exports.

mod renderer;

pub use renderer::{SHEET_NAME, XlsxRenderer, excel_serial};
