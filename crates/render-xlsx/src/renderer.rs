use chrono::{NaiveDate, NaiveDateTime, Timelike};
use rentdesk_render_core::utils::ensure_rows;
use rentdesk_render_core::{RenderContext, RenderError, TabularRenderer};
use rentdesk_types::{CellValue, ExportFormat, ExportOptions, TabularRow, column_keys};
use rust_xlsxwriter::{DocProperties, Format, Workbook, Worksheet, XlsxError};

pub const SHEET_NAME: &str = "Report";

const DATE_NUM_FORMAT: &str = "dd.mm.yyyy";
const DATETIME_NUM_FORMAT: &str = "dd.mm.yyyy hh:mm:ss";
const DEFAULT_TITLE: &str = "Data export";
const DEFAULT_SUBJECT: &str = "Report";

fn spreadsheet_err(e: XlsxError) -> RenderError {
    RenderError::Spreadsheet(e.to_string())
}

fn column_index(col: usize) -> Result<u16, RenderError> {
    u16::try_from(col).map_err(|_| RenderError::Spreadsheet(format!("too many columns: {}", col + 1)))
}

/// Days since the 1900 date system epoch (1899-12-30), with the time of day
/// as the fractional part.
pub fn excel_serial(at: NaiveDateTime) -> f64 {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or_default();
    let days = (at.date() - epoch).num_days() as f64;
    days + at.time().num_seconds_from_midnight() as f64 / 86_400.0
}

/// Writes one sheet: a header row of raw keys, then one typed row per record.
#[derive(Debug, Default, Clone, Copy)]
pub struct XlsxRenderer;

impl XlsxRenderer {
    pub fn new() -> Self {
        Self
    }

    fn write_cell(
        sheet: &mut Worksheet,
        row: u32,
        col: u16,
        value: &CellValue,
        formats: &CellFormats,
    ) -> Result<(), XlsxError> {
        match value {
            CellValue::Null => {}
            CellValue::Bool(b) => {
                sheet.write_boolean(row, col, *b)?;
            }
            CellValue::Int(i) => {
                sheet.write_number(row, col, *i as f64)?;
            }
            CellValue::Float(f) if f.is_finite() => {
                sheet.write_number(row, col, *f)?;
            }
            CellValue::Float(f) => {
                sheet.write_string(row, col, f.to_string())?;
            }
            CellValue::Text(s) => {
                sheet.write_string(row, col, s)?;
            }
            CellValue::Date(d) => {
                let serial = excel_serial(d.and_time(chrono::NaiveTime::MIN));
                sheet.write_number_with_format(row, col, serial, &formats.date)?;
            }
            CellValue::DateTime(dt) => {
                sheet.write_number_with_format(row, col, excel_serial(*dt), &formats.datetime)?;
            }
        }
        Ok(())
    }
}

struct CellFormats {
    date: Format,
    datetime: Format,
}

impl CellFormats {
    fn new() -> Self {
        Self {
            date: Format::new().set_num_format(DATE_NUM_FORMAT),
            datetime: Format::new().set_num_format(DATETIME_NUM_FORMAT),
        }
    }
}

impl TabularRenderer for XlsxRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Xlsx
    }

    fn render_rows(
        &self,
        rows: &[TabularRow],
        options: &ExportOptions,
        _ctx: &RenderContext,
    ) -> Result<Vec<u8>, RenderError> {
        ensure_rows(rows)?;
        let keys = column_keys(rows);
        let formats = CellFormats::new();
        let mut workbook = Workbook::new();

        let company = options
            .branding
            .as_ref()
            .map(|b| b.company_name.as_str())
            .filter(|name| !name.is_empty());
        if let Some(company) = company {
            let metadata = options.metadata.as_ref();
            let title = metadata
                .and_then(|m| m.title.as_deref())
                .unwrap_or(DEFAULT_TITLE);
            let subject = metadata
                .and_then(|m| m.subject.as_deref())
                .unwrap_or(DEFAULT_SUBJECT);
            let properties = DocProperties::new()
                .set_title(title)
                .set_subject(subject)
                .set_author(company);
            workbook.set_properties(&properties);
        }

        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME).map_err(spreadsheet_err)?;

        for (col, key) in keys.iter().enumerate() {
            sheet
                .write_string(0, column_index(col)?, key)
                .map_err(spreadsheet_err)?;
        }
        for (index, record) in rows.iter().enumerate() {
            let row = index as u32 + 1;
            for (col, key) in keys.iter().enumerate() {
                if let Some(value) = record.get(key) {
                    Self::write_cell(sheet, row, column_index(col)?, value, &formats)
                        .map_err(spreadsheet_err)?;
                }
            }
        }
        sheet.autofit();

        log::debug!("Wrote {} rows x {} columns to sheet '{}'", rows.len(), keys.len(), SHEET_NAME);
        workbook.save_to_buffer().map_err(spreadsheet_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentdesk_types::BrandingOptions;

    #[test]
    fn test_excel_serial() {
        let day = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        assert_eq!(excel_serial(day(1900, 1, 1).and_hms_opt(0, 0, 0).unwrap()), 2.0);
        assert_eq!(excel_serial(day(2024, 1, 1).and_hms_opt(0, 0, 0).unwrap()), 45292.0);
        assert_eq!(excel_serial(day(2024, 1, 1).and_hms_opt(12, 0, 0).unwrap()), 45292.5);
    }

    #[test]
    fn test_column_index_does_not_wrap() {
        assert_eq!(column_index(65_535).unwrap(), u16::MAX);
        assert!(matches!(column_index(65_536), Err(RenderError::Spreadsheet(_))));
    }

    #[test]
    fn test_empty_rows_are_rejected() {
        let result =
            XlsxRenderer::new().render_rows(&[], &ExportOptions::default(), &RenderContext::default());
        assert!(matches!(result, Err(RenderError::NoData)));
    }

    #[test]
    fn test_output_is_a_zip_container() {
        let rows = vec![
            TabularRow::new()
                .with("name", "Tent")
                .with("price", 12.5)
                .with("available", true)
                .with("since", NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()),
            TabularRow::new().with("name", "Stove"),
        ];
        let options = ExportOptions::new(ExportFormat::Xlsx).with_branding(BrandingOptions {
            company_name: "Acme Rentals".into(),
            ..Default::default()
        });
        let bytes = XlsxRenderer::new()
            .render_rows(&rows, &options, &RenderContext::default())
            .unwrap();
        assert!(bytes.starts_with(b"PK"));
    }
}
