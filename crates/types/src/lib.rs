pub mod branding;
pub mod color;
pub mod options;
pub mod page;
pub mod row;

pub use branding::{BrandingOptions, ColorScheme, CustomColors, Fonts, ThemeColors, ThemeError};
pub use color::Color;
pub use options::{DocumentMetadata, ExportFormat, ExportOptions, default_base_name};
pub use page::{MM_TO_PT, Orientation, PageGeometry, PageSize, mm_to_pt};
pub use row::{CellValue, RowError, TabularRow, column_keys};
