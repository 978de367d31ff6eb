use rentdesk_types::ThemeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("No data to export")]
    NoData,
    #[error("I/O error while writing the document: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),
    #[error("Invalid branding: {0}")]
    Theme(#[from] ThemeError),
    #[error("Image error: {0}")]
    Image(String),
    /// Footer template failed to compile or render.
    #[error("Footer template error: {0}")]
    Template(String),
}

impl From<lopdf::Error> for RenderError {
    fn from(err: lopdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}
