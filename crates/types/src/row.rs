//! Tabular export input.
//!
//! A [`TabularRow`] is an ordered key/value mapping. The keys of the first row
//! of a dataset become the column headers of every renderer, so datasets are
//! expected to share a homogeneous key set. Keys missing from later rows are
//! rendered as empty cells.

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowError {
    #[error("Export input must be a JSON array of objects, got {0}")]
    NotAnArray(&'static str),

    #[error("Row {index} is not a JSON object")]
    NotAnObject { index: usize },
}

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Renders the value the way the text-based renderers print it.
    ///
    /// Dates use `date_format` (a chrono format string); whole floats print
    /// without a fractional part.
    pub fn display(&self, date_format: &str) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) => format_float(*f),
            CellValue::Text(s) => s.clone(),
            CellValue::Date(d) => d.format(date_format).to_string(),
            CellValue::DateTime(dt) => dt.date().format(date_format).to_string(),
        }
    }
}

fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<i32> for CellValue {
    fn from(i: i32) -> Self {
        CellValue::Int(i as i64)
    }
}

impl From<u32> for CellValue {
    fn from(i: u32) -> Self {
        CellValue::Int(i as i64)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::DateTime(dt)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(CellValue::Null)
    }
}

impl From<&Value> for CellValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => CellValue::Null,
            Value::Bool(b) => CellValue::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => CellValue::Int(i),
                None => CellValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => CellValue::Text(s.clone()),
            // Nested structures have no column of their own; keep their JSON text.
            other => CellValue::Text(other.to_string()),
        }
    }
}

/// An ordered key/value row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabularRow {
    cells: Vec<(String, CellValue)>,
}

impl TabularRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert. Re-using a key replaces its value in place.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<CellValue>) {
        let key = key.into();
        let value = value.into();
        match self.cells.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.cells.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.cells.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn from_json_object(object: &Map<String, Value>) -> Self {
        Self {
            cells: object
                .iter()
                .map(|(k, v)| (k.clone(), CellValue::from(v)))
                .collect(),
        }
    }

    /// Converts a JSON array of objects into rows, preserving key order.
    pub fn rows_from_json(value: &Value) -> Result<Vec<TabularRow>, RowError> {
        let items = match value {
            Value::Array(items) => items,
            Value::Object(_) => return Err(RowError::NotAnArray("an object")),
            Value::String(_) => return Err(RowError::NotAnArray("a string")),
            Value::Number(_) => return Err(RowError::NotAnArray("a number")),
            Value::Bool(_) => return Err(RowError::NotAnArray("a boolean")),
            Value::Null => return Err(RowError::NotAnArray("null")),
        };
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                item.as_object()
                    .map(Self::from_json_object)
                    .ok_or(RowError::NotAnObject { index })
            })
            .collect()
    }
}

/// The column keys of a dataset: the keys of its first row.
pub fn column_keys(rows: &[TabularRow]) -> Vec<String> {
    rows.first()
        .map(|row| row.keys().map(str::to_string).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_rows_keep_key_order() {
        let rows = TabularRow::rows_from_json(&json!([
            {"zeta": 1, "alpha": "a", "mid": null},
        ]))
        .unwrap();
        let keys: Vec<_> = rows[0].keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(rows[0].get("mid"), Some(&CellValue::Null));
    }

    #[test]
    fn test_rows_from_json_rejects_non_arrays() {
        assert_eq!(
            TabularRow::rows_from_json(&json!({"a": 1})),
            Err(RowError::NotAnArray("an object"))
        );
        assert_eq!(
            TabularRow::rows_from_json(&json!([{"a": 1}, 2])),
            Err(RowError::NotAnObject { index: 1 })
        );
    }

    #[test]
    fn test_insert_replaces_existing_key() {
        let row = TabularRow::new().with("a", 1).with("b", 2).with("a", 3);
        assert_eq!(row.len(), 2);
        assert_eq!(row.get("a"), Some(&CellValue::Int(3)));
        assert_eq!(row.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_display_values() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(CellValue::Float(10.0).display("%d.%m.%Y"), "10");
        assert_eq!(CellValue::Float(10.5).display("%d.%m.%Y"), "10.5");
        assert_eq!(CellValue::Date(date).display("%d.%m.%Y"), "09.03.2024");
        assert_eq!(CellValue::Null.display("%d.%m.%Y"), "");
        assert_eq!(CellValue::from(None::<i64>), CellValue::Null);
    }

    #[test]
    fn test_column_keys_come_from_first_row() {
        let rows = vec![
            TabularRow::new().with("name", "A").with("price", 10),
            TabularRow::new().with("other", true),
        ];
        assert_eq!(column_keys(&rows), vec!["name", "price"]);
        assert!(column_keys(&[]).is_empty());
    }
}
