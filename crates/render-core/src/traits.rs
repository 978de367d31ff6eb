use crate::error::RenderError;
use crate::types::RenderContext;
use rentdesk_types::{ExportFormat, ExportOptions, TabularRow};

/// A backend that turns rows into the bytes of one downloadable file.
///
/// Implementations build the whole document in memory; nothing is written
/// anywhere until the caller hands the bytes to a sink.
pub trait TabularRenderer: Send + Sync {
    fn format(&self) -> ExportFormat;

    /// # Errors
    ///
    /// `RenderError::NoData` when `rows` is empty.
    fn render_rows(
        &self,
        rows: &[TabularRow],
        options: &ExportOptions,
        ctx: &RenderContext,
    ) -> Result<Vec<u8>, RenderError>;
}
