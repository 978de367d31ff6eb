use super::{DownloadSink, Exporter, FilesystemSink};
use crate::config::ExportConfig;
use crate::error::ExportError;
use chrono::NaiveDateTime;
use rentdesk_render_core::{DEFAULT_DATE_FORMAT, DEFAULT_TIMESTAMP_FORMAT};
use rentdesk_render_csv::CsvRenderer;
use rentdesk_render_lopdf::PdfRenderer;
use rentdesk_render_xlsx::XlsxRenderer;
use rentdesk_resource::{DirectoryCaptureSource, FilesystemResourceProvider};
use rentdesk_traits::{
    CaptureSource, InMemoryCaptureSource, InMemoryResourceProvider, ResourceProvider,
};
use std::sync::Arc;

/// Wires an [`Exporter`] from its collaborators.
pub struct ExporterBuilder {
    resources: Option<Arc<dyn ResourceProvider>>,
    capture: Option<Arc<dyn CaptureSource>>,
    sink: Option<Arc<dyn DownloadSink>>,
    date_format: String,
    timestamp_format: String,
    clock: Option<NaiveDateTime>,
}

impl Default for ExporterBuilder {
    fn default() -> Self {
        Self {
            resources: None,
            capture: None,
            sink: None,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            clock: None,
        }
    }
}

impl ExporterBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Filesystem assets, snapshot captures and output directory from `config`.
    pub fn from_config(config: &ExportConfig) -> Self {
        Self::new()
            .with_resources(Arc::new(FilesystemResourceProvider::new(&config.asset_dir)))
            .with_capture_source(Arc::new(DirectoryCaptureSource::new(&config.capture_dir)))
            .with_sink(Arc::new(FilesystemSink::new(&config.output_dir)))
            .with_formats(&config.date_format, &config.timestamp_format)
    }

    /// Resolves branding logo paths.
    pub fn with_resources(mut self, resources: Arc<dyn ResourceProvider>) -> Self {
        self.resources = Some(resources);
        self
    }

    pub fn with_capture_source(mut self, capture: Arc<dyn CaptureSource>) -> Self {
        self.capture = Some(capture);
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn DownloadSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn with_formats(mut self, date_format: &str, timestamp_format: &str) -> Self {
        self.date_format = date_format.to_string();
        self.timestamp_format = timestamp_format.to_string();
        self
    }

    /// Pins the generation time, for reproducible file names and timestamps.
    pub fn with_fixed_time(mut self, at: NaiveDateTime) -> Self {
        self.clock = Some(at);
        self
    }

    pub fn build(self) -> Result<Exporter, ExportError> {
        let sink = self.sink.ok_or(ExportError::MissingSink)?;
        let resources = self
            .resources
            .unwrap_or_else(|| Arc::new(InMemoryResourceProvider::new()));
        let capture = self
            .capture
            .unwrap_or_else(|| Arc::new(InMemoryCaptureSource::new()));

        Ok(Exporter {
            pdf: Arc::new(PdfRenderer::new(resources)),
            xlsx: Arc::new(XlsxRenderer::new()),
            csv: Arc::new(CsvRenderer::new()),
            capture,
            sink,
            date_format: self.date_format,
            timestamp_format: self.timestamp_format,
            clock: self.clock,
        })
    }
}
