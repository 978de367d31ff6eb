//! The export facade: validates input, renders off the async runtime and
//! hands the single finished file to a [`DownloadSink`].

mod builder;
mod sink;

pub use builder::ExporterBuilder;
pub use sink::{DownloadSink, FilesystemSink, MemorySink};

use crate::error::ExportError;
use chrono::{Local, NaiveDateTime};
use rentdesk_render_core::{RenderContext, RenderedFile, TabularRenderer};
use rentdesk_render_csv::CsvRenderer;
use rentdesk_render_lopdf::PdfRenderer;
use rentdesk_render_xlsx::XlsxRenderer;
use rentdesk_traits::CaptureSource;
use rentdesk_types::{ExportFormat, ExportOptions, TabularRow};
use std::sync::Arc;

pub struct Exporter {
    pdf: Arc<PdfRenderer>,
    xlsx: Arc<XlsxRenderer>,
    csv: Arc<CsvRenderer>,
    capture: Arc<dyn CaptureSource>,
    sink: Arc<dyn DownloadSink>,
    date_format: String,
    timestamp_format: String,
    clock: Option<NaiveDateTime>,
}

impl Exporter {
    pub fn builder() -> ExporterBuilder {
        ExporterBuilder::new()
    }

    fn context(&self) -> RenderContext {
        let now = self.clock.unwrap_or_else(|| Local::now().naive_local());
        RenderContext::at(now).with_formats(&self.date_format, &self.timestamp_format)
    }

    fn renderer_for(&self, format: ExportFormat) -> Arc<dyn TabularRenderer> {
        match format {
            ExportFormat::Pdf => self.pdf.clone(),
            ExportFormat::Xlsx => self.xlsx.clone(),
            ExportFormat::Csv => self.csv.clone(),
        }
    }

    async fn deliver(&self, file: RenderedFile) -> Result<(), ExportError> {
        let file_name = file.file_name.clone();
        self.sink
            .save(file)
            .await
            .map_err(|source| ExportError::Sink { file_name, source })
    }

    /// Exports tabular rows in `options.format`.
    ///
    /// Empty input fails with [`ExportError::NoData`] before anything is
    /// rendered. On success the sink receives exactly one file.
    pub async fn export_data(
        &self,
        rows: Vec<TabularRow>,
        options: ExportOptions,
    ) -> Result<(), ExportError> {
        if rows.is_empty() {
            log::warn!("Export requested with no rows");
            return Err(ExportError::NoData);
        }

        let ctx = self.context();
        let format = options.format;
        let file_name = options.resolved_file_name(ctx.today());
        let renderer = self.renderer_for(format);
        log::info!("Exporting {} rows as {} to '{}'", rows.len(), format, file_name);

        let bytes = tokio::task::spawn_blocking(move || renderer.render_rows(&rows, &options, &ctx))
            .await??;

        self.deliver(RenderedFile {
            file_name,
            mime_type: format.mime_type(),
            bytes,
        })
        .await
    }

    /// Captures the element `element_id` and exports it as a paginated PDF,
    /// whatever `options.format` says.
    pub async fn export_element_to_document(
        &self,
        element_id: &str,
        mut options: ExportOptions,
    ) -> Result<(), ExportError> {
        options.format = ExportFormat::Pdf;
        let ctx = self.context();
        let file_name = options.resolved_file_name(ctx.today());
        log::info!("Exporting element '{}' to '{}'", element_id, file_name);

        let capture = self.capture.clone();
        let pdf = self.pdf.clone();
        let id = element_id.to_string();
        let bytes = tokio::task::spawn_blocking(move || -> Result<Vec<u8>, ExportError> {
            let image = capture.capture(&id)?;
            Ok(pdf.render_capture(&image, &options, &ctx)?)
        })
        .await??;

        self.deliver(RenderedFile {
            file_name,
            mime_type: ExportFormat::Pdf.mime_type(),
            bytes,
        })
        .await
    }
}
