#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use chrono::{NaiveDate, NaiveDateTime};
use lopdf::Document as LopdfDocument;
use rentdesk::traits::{CaptureSource, InMemoryCaptureSource, ResourceProvider};
use rentdesk::{Exporter, ExporterBuilder, MemorySink, RenderedFile};
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// An exported PDF, parsed back for assertions.
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }
}

/// 2024-03-15 09:30:00, the clock every facade test runs at.
pub fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 15)
        .and_then(|d| d.and_hms_opt(9, 30, 0))
        .expect("valid fixture time")
}

/// An exporter with a pinned clock that delivers into the returned sink.
pub fn test_exporter(
    capture: Arc<dyn CaptureSource>,
    resources: Option<Arc<dyn ResourceProvider>>,
) -> (Exporter, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let mut builder = ExporterBuilder::new()
        .with_sink(sink.clone())
        .with_capture_source(capture)
        .with_fixed_time(fixed_time());
    if let Some(resources) = resources {
        builder = builder.with_resources(resources);
    }
    let exporter = builder.build().expect("sink is configured");
    (exporter, sink)
}

pub fn data_exporter() -> (Exporter, Arc<MemorySink>) {
    test_exporter(Arc::new(InMemoryCaptureSource::new()), None)
}

/// The one file a sink received, failing the test otherwise.
pub fn single_file(sink: &MemorySink) -> RenderedFile {
    let mut files = sink.files();
    assert_eq!(files.len(), 1, "expected exactly one delivered file");
    files.remove(0)
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
