use chrono::{Local, NaiveDate, NaiveDateTime};

/// `dd.mm.yyyy`, the storefront's locale date style.
pub const DEFAULT_DATE_FORMAT: &str = "%d.%m.%Y";
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";

/// Per-export rendering context: the clock reading and locale formats.
///
/// Passing the clock in keeps renderers deterministic under test.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderContext {
    pub generated_at: NaiveDateTime,
    pub date_format: String,
    pub timestamp_format: String,
}

impl RenderContext {
    pub fn now() -> Self {
        Self::at(Local::now().naive_local())
    }

    pub fn at(generated_at: NaiveDateTime) -> Self {
        Self {
            generated_at,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }

    pub fn with_formats(mut self, date_format: &str, timestamp_format: &str) -> Self {
        self.date_format = date_format.to_string();
        self.timestamp_format = timestamp_format.to_string();
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.generated_at.date()
    }

    pub fn timestamp(&self) -> String {
        self.generated_at.format(&self.timestamp_format).to_string()
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::now()
    }
}

/// A finished, in-memory file ready for the download sink.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}
