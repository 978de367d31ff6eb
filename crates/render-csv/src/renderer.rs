use crate::escape::escape_field;
use itertools::Itertools;
use rentdesk_render_core::utils::{cell_text, ensure_rows};
use rentdesk_render_core::{RenderContext, RenderError, TabularRenderer};
use rentdesk_types::{ExportFormat, ExportOptions, TabularRow, column_keys};

const LINE_END: &str = "\r\n";

#[derive(Debug, Default, Clone, Copy)]
pub struct CsvRenderer;

impl CsvRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Renders rows to a CSV string: header of the first row's keys, then one
    /// line per row in input order.
    pub fn render_to_string(
        &self,
        rows: &[TabularRow],
        ctx: &RenderContext,
    ) -> Result<String, RenderError> {
        ensure_rows(rows)?;
        let keys = column_keys(rows);

        let mut out = String::new();
        out.push_str(&keys.iter().map(|k| escape_field(k)).join(","));
        out.push_str(LINE_END);
        for row in rows {
            let line = keys
                .iter()
                .map(|key| escape_field(&cell_text(row, key, &ctx.date_format)).into_owned())
                .join(",");
            out.push_str(&line);
            out.push_str(LINE_END);
        }
        log::debug!("Rendered {} CSV records", rows.len());
        Ok(out)
    }
}

impl TabularRenderer for CsvRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn render_rows(
        &self,
        rows: &[TabularRow],
        _options: &ExportOptions,
        ctx: &RenderContext,
    ) -> Result<Vec<u8>, RenderError> {
        self.render_to_string(rows, ctx).map(String::into_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::escape::split_record;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use rentdesk_types::CellValue;

    fn ctx() -> RenderContext {
        RenderContext::at(
            NaiveDate::from_ymd_opt(2024, 6, 1)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_simple_rows() {
        let rows: Vec<_> = [("A", 10), ("B", 20), ("C", 30)]
            .into_iter()
            .map(|(name, price)| TabularRow::new().with("name", name).with("price", price))
            .collect();
        let csv = CsvRenderer::new().render_to_string(&rows, &ctx()).unwrap();
        assert_eq!(csv, "name,price\r\nA,10\r\nB,20\r\nC,30\r\n");
    }

    #[test]
    fn test_missing_and_null_cells_are_empty() {
        let rows = vec![
            TabularRow::new().with("a", 1).with("b", "x"),
            TabularRow::new().with("a", CellValue::Null),
        ];
        let csv = CsvRenderer::new().render_to_string(&rows, &ctx()).unwrap();
        assert_eq!(csv, "a,b\r\n1,x\r\n,\r\n");
    }

    #[test]
    fn test_dates_use_context_format() {
        let rows = vec![TabularRow::new().with("from", NaiveDate::from_ymd_opt(2024, 3, 9).unwrap())];
        let csv = CsvRenderer::new().render_to_string(&rows, &ctx()).unwrap();
        assert_eq!(csv, "from\r\n09.03.2024\r\n");

        let iso = ctx().with_formats("%Y-%m-%d", "%Y-%m-%d %H:%M");
        let csv = CsvRenderer::new().render_to_string(&rows, &iso).unwrap();
        assert_eq!(csv, "from\r\n2024-03-09\r\n");
    }

    #[test]
    fn test_no_rows_is_an_error() {
        let result = CsvRenderer::new().render_rows(&[], &ExportOptions::default(), &ctx());
        assert!(matches!(result, Err(RenderError::NoData)));
    }

    proptest! {
        #[test]
        fn line_count_is_rows_plus_header(values in proptest::collection::vec("[a-z0-9 ]{0,12}", 1..40)) {
            let rows: Vec<_> = values
                .iter()
                .map(|v| TabularRow::new().with("value", v.as_str()))
                .collect();
            let csv = CsvRenderer::new().render_to_string(&rows, &ctx()).unwrap();
            prop_assert_eq!(csv.matches("\r\n").count(), rows.len() + 1);
            prop_assert!(csv.ends_with("\r\n"));
        }

        #[test]
        fn quoted_values_survive_a_round_trip(value in "[a-z,\" ]{0,16}") {
            let rows = vec![TabularRow::new().with("note", value.as_str()).with("n", 1)];
            let csv = CsvRenderer::new().render_to_string(&rows, &ctx()).unwrap();
            let body = csv.split("\r\n").nth(1).unwrap();
            prop_assert_eq!(split_record(body).unwrap(), vec![value.clone(), "1".to_string()]);
        }
    }
}
