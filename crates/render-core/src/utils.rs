use crate::error::RenderError;
use rentdesk_types::TabularRow;

/// Rejects empty datasets before any document work starts.
pub fn ensure_rows(rows: &[TabularRow]) -> Result<(), RenderError> {
    if rows.is_empty() {
        Err(RenderError::NoData)
    } else {
        Ok(())
    }
}

/// Turns a row key into a display header: `rentalDays` → `Rental Days`,
/// `deposit_total` → `Deposit Total`.
pub fn title_case_header(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut word_start = true;
    for c in key.chars() {
        if c == '_' {
            out.push(' ');
            word_start = true;
            continue;
        }
        if c.is_uppercase() && !word_start {
            out.push(' ');
        }
        if word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        word_start = false;
    }
    out
}

/// Text of one cell; missing keys render empty.
pub fn cell_text(row: &TabularRow, key: &str, date_format: &str) -> String {
    row.get(key)
        .map(|value| value.display(date_format))
        .unwrap_or_default()
}

/// Convert a top-down layout Y coordinate to PDF space (origin bottom-left).
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_header() {
        assert_eq!(title_case_header("name"), "Name");
        assert_eq!(title_case_header("rentalDays"), "Rental Days");
        assert_eq!(title_case_header("deposit_total"), "Deposit Total");
        assert_eq!(title_case_header("start_date"), "Start Date");
        assert_eq!(title_case_header(""), "");
    }

    #[test]
    fn test_ensure_rows() {
        assert!(matches!(ensure_rows(&[]), Err(RenderError::NoData)));
        assert!(ensure_rows(&[TabularRow::new().with("a", 1)]).is_ok());
    }

    #[test]
    fn test_cell_text_for_missing_key_is_empty() {
        let row = TabularRow::new().with("a", 1);
        assert_eq!(cell_text(&row, "a", "%d.%m.%Y"), "1");
        assert_eq!(cell_text(&row, "b", "%d.%m.%Y"), "");
    }

    #[test]
    fn test_flip_y() {
        assert_eq!(flip_y(10.0, 100.0), 90.0);
    }
}
