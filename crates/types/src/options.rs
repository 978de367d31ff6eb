use crate::branding::BrandingOptions;
use crate::page::{Orientation, PageGeometry, PageSize};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Paginated document.
    #[default]
    Pdf,
    /// Spreadsheet workbook.
    Xlsx,
    /// Comma-separated text.
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Csv => "text/csv;charset=utf-8",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(format!("Unsupported export format: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub keywords: Option<String>,
}

/// Everything one export invocation needs besides its data.
///
/// Built fresh per export from form state; never persisted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// Base name without extension.
    pub file_name: Option<String>,
    pub include_timestamp: bool,
    pub orientation: Orientation,
    pub page_size: PageSize,
    pub branding: Option<BrandingOptions>,
    pub metadata: Option<DocumentMetadata>,
}

impl ExportOptions {
    pub fn new(format: ExportFormat) -> Self {
        Self {
            format,
            ..Default::default()
        }
    }

    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    pub fn with_timestamp(mut self, include: bool) -> Self {
        self.include_timestamp = include;
        self
    }

    pub fn with_page(mut self, size: PageSize, orientation: Orientation) -> Self {
        self.page_size = size;
        self.orientation = orientation;
        self
    }

    pub fn with_branding(mut self, branding: BrandingOptions) -> Self {
        self.branding = Some(branding);
        self
    }

    pub fn with_metadata(mut self, metadata: DocumentMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn page_geometry(&self) -> PageGeometry {
        PageGeometry::new(self.page_size, self.orientation)
    }

    /// Final file name: the base name (or `export_<date>`) plus the format's extension.
    pub fn resolved_file_name(&self, today: NaiveDate) -> String {
        let base = self
            .file_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("export_{}", today.format("%Y-%m-%d")));
        format!("{}.{}", base, self.format.extension())
    }
}

/// Default base name for a report: its slugified title plus the date,
/// e.g. `monthly_revenue_2024-05-01`.
pub fn default_base_name(report_title: &str, today: NaiveDate) -> String {
    let slug = slug::slugify(report_title).replace('-', "_");
    if slug.is_empty() {
        format!("export_{}", today.format("%Y-%m-%d"))
    } else {
        format!("{}_{}", slug, today.format("%Y-%m-%d"))
    }
}
