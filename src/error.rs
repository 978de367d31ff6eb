use rentdesk_branding::BrandingError;
use rentdesk_render_core::RenderError;
use rentdesk_storefront::CartError;
use rentdesk_traits::{CaptureError, ResourceError, StoreError};
use rentdesk_types::RowError;
use thiserror::Error;

/// Every failure an export, template or cart operation can report.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("No data to export")]
    NoData,

    #[error("Element '{0}' not found")]
    ElementNotFound(String),

    #[error("Capturing the element failed: {0}")]
    Capture(CaptureError),

    #[error("Rendering failed: {0}")]
    Render(RenderError),

    #[error("Invalid export input: {0}")]
    Input(#[from] RowError),

    #[error("Branding template error: {0}")]
    Branding(#[from] BrandingError),

    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to save '{file_name}': {source}")]
    Sink {
        file_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Exporter has no download sink configured")]
    MissingSink,

    #[error("Background render task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<RenderError> for ExportError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::NoData => ExportError::NoData,
            other => ExportError::Render(other),
        }
    }
}

impl From<CaptureError> for ExportError {
    fn from(err: CaptureError) -> Self {
        match err {
            CaptureError::ElementNotFound(id) => ExportError::ElementNotFound(id),
            other => ExportError::Capture(other),
        }
    }
}
