//! Report exports for a rental storefront.
//!
//! The [`Exporter`] turns tabular rows into PDF, XLSX or CSV files, or a
//! captured page element into a paginated PDF, optionally branded from a
//! [`BrandingStore`] template. The storefront cart and catalog query live in
//! [`storefront`].

pub mod config;
pub mod error;
pub mod export;

pub use crate::config::ExportConfig;
pub use error::ExportError;
pub use export::{DownloadSink, Exporter, ExporterBuilder, FilesystemSink, MemorySink};

pub use rentdesk_branding::{
    BrandingError, BrandingStore, BrandingTemplate, NewTemplate, TemplatePatch, TemplateType,
};
pub use rentdesk_render_core::{RenderContext, RenderedFile};
pub use rentdesk_types::{
    BrandingOptions, CellValue, ColorScheme, CustomColors, DocumentMetadata, ExportFormat,
    ExportOptions, Orientation, PageSize, TabularRow,
};

pub use rentdesk_resource as resource;
pub use rentdesk_storefront as storefront;
pub use rentdesk_traits as traits;
pub use rentdesk_types as types;
