use crate::canvas::{FontWeight, PageCanvas};
use crate::helpers::truncate_to_width;
use rentdesk_render_core::utils::{cell_text, title_case_header};
use rentdesk_types::{Color, PageGeometry, TabularRow, ThemeColors, column_keys};

const MARGIN_X: f32 = 10.0;
const TABLE_TOP: f32 = 30.0;
const TITLE_BASELINE: f32 = 26.0;
const TITLE_SIZE: f32 = 12.0;
const BOTTOM_MARGIN: f32 = 15.0;
const HEADER_HEIGHT: f32 = 9.0;
const ROW_HEIGHT: f32 = 8.0;
const FONT_SIZE: f32 = 9.0;
const CELL_PADDING: f32 = 2.0;
const PT_TO_MM: f32 = 25.4 / 72.0;

const STRIPE: Color = Color::gray(0xf5);
const GRID: Color = Color::gray(200);
const BODY_TEXT: Color = Color::gray(0x33);

/// Column layout shared by every page of one table.
#[derive(Debug, Clone)]
pub struct TableLayout {
    keys: Vec<String>,
    headers: Vec<String>,
    column_width: f32,
    rows_per_page: usize,
}

impl TableLayout {
    pub fn new(rows: &[TabularRow], geometry: PageGeometry) -> Self {
        let keys = column_keys(rows);
        let headers = keys.iter().map(|k| title_case_header(k)).collect();
        let content_width = geometry.width - 2.0 * MARGIN_X;
        let column_width = content_width / keys.len().max(1) as f32;
        let body = geometry.height - BOTTOM_MARGIN - TABLE_TOP - HEADER_HEIGHT;
        let rows_per_page = ((body / ROW_HEIGHT).floor() as usize).max(1);
        Self {
            keys,
            headers,
            column_width,
            rows_per_page,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn page_count(&self, row_count: usize) -> usize {
        row_count.div_ceil(self.rows_per_page).max(1)
    }

    /// Draws the header plus `chunk`, whose first row has index `first_index`
    /// in the full dataset (used for striping).
    pub fn draw_page(
        &self,
        canvas: &mut PageCanvas,
        chunk: &[TabularRow],
        first_index: usize,
        theme: Option<&ThemeColors>,
        date_format: &str,
    ) {
        let header_fill = theme.copied().unwrap_or_default().table_header;
        let table_width = self.column_width * self.keys.len() as f32;

        canvas.fill_rect(MARGIN_X, TABLE_TOP, table_width, HEADER_HEIGHT, header_fill);
        for (col, header) in self.headers.iter().enumerate() {
            self.draw_cell(
                canvas,
                header,
                col,
                TABLE_TOP,
                HEADER_HEIGHT,
                FontWeight::Bold,
                Color::WHITE,
            );
        }

        let mut y = TABLE_TOP + HEADER_HEIGHT;
        for (offset, row) in chunk.iter().enumerate() {
            if (first_index + offset) % 2 == 1 {
                canvas.fill_rect(MARGIN_X, y, table_width, ROW_HEIGHT, STRIPE);
            }
            for (col, key) in self.keys.iter().enumerate() {
                let x = MARGIN_X + col as f32 * self.column_width;
                canvas.stroke_rect(x, y, self.column_width, ROW_HEIGHT, GRID);
                let text = cell_text(row, key, date_format);
                self.draw_cell(canvas, &text, col, y, ROW_HEIGHT, FontWeight::Regular, BODY_TEXT);
            }
            y += ROW_HEIGHT;
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_cell(
        &self,
        canvas: &mut PageCanvas,
        text: &str,
        col: usize,
        top: f32,
        height: f32,
        weight: FontWeight,
        color: Color,
    ) {
        let font_mm = FONT_SIZE * PT_TO_MM;
        let fitted = truncate_to_width(text, font_mm, self.column_width - 2.0 * CELL_PADDING);
        let x = MARGIN_X + col as f32 * self.column_width + CELL_PADDING;
        let baseline = top + height / 2.0 + font_mm * 0.35;
        canvas.text(&fitted, x, baseline, FONT_SIZE, weight, color);
    }
}

/// Report title drawn above the table on the first page.
pub fn draw_title(canvas: &mut PageCanvas, title: &str) {
    canvas.text(title, MARGIN_X, TITLE_BASELINE, TITLE_SIZE, FontWeight::Bold, BODY_TEXT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentdesk_types::{Orientation, PageSize};

    fn rows(n: usize) -> Vec<TabularRow> {
        (0..n)
            .map(|i| TabularRow::new().with("productName", format!("Item {}", i)).with("price", i as i64))
            .collect()
    }

    #[test]
    fn test_headers_are_title_cased() {
        let geometry = PageGeometry::new(PageSize::A4, Orientation::Portrait);
        let layout = TableLayout::new(&rows(1), geometry);
        assert_eq!(layout.headers(), &["Product Name".to_string(), "Price".to_string()]);
    }

    #[test]
    fn test_rows_per_page_and_page_count() {
        let geometry = PageGeometry::new(PageSize::A4, Orientation::Portrait);
        let layout = TableLayout::new(&rows(1), geometry);
        // (297 - 15 - 30 - 9) / 8 = 30.375
        assert_eq!(layout.rows_per_page(), 30);
        assert_eq!(layout.page_count(30), 1);
        assert_eq!(layout.page_count(31), 2);
        assert_eq!(layout.page_count(0), 1);
    }

    #[test]
    fn test_landscape_fits_fewer_rows() {
        let geometry = PageGeometry::new(PageSize::A4, Orientation::Landscape);
        let layout = TableLayout::new(&rows(1), geometry);
        // (210 - 54) / 8 = 19.5
        assert_eq!(layout.rows_per_page(), 19);
    }

    #[test]
    fn test_odd_rows_are_striped() {
        let geometry = PageGeometry::new(PageSize::A4, Orientation::Portrait);
        let data = rows(2);
        let layout = TableLayout::new(&data, geometry);

        let mut even_start = PageCanvas::new(geometry);
        layout.draw_page(&mut even_start, &data[..1], 0, None, "%d.%m.%Y");
        let mut odd_start = PageCanvas::new(geometry);
        layout.draw_page(&mut odd_start, &data[..1], 1, None, "%d.%m.%Y");

        let fills = |c: &PageCanvas| c.operators().iter().filter(|op| **op == "f").count();
        assert_eq!(fills(&even_start), 1);
        assert_eq!(fills(&odd_start), 2);
    }

    #[test]
    fn test_unbranded_header_uses_brand_orange() {
        let geometry = PageGeometry::new(PageSize::A4, Orientation::Portrait);
        let data = rows(1);
        let layout = TableLayout::new(&data, geometry);

        let mut canvas = PageCanvas::new(geometry);
        layout.draw_page(&mut canvas, &data, 0, None, "%d.%m.%Y");
        let orange = Color::rgb(0xff, 0x66, 0x00).to_unit_rgb();
        assert_eq!(canvas.fill_colors().first(), Some(&orange));
    }
}
