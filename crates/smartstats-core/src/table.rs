// File: crates/smartstats-core/src/table.rs
// Summary: RawTable model: ordered rows of column-name -> raw cell text.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON row object as carried by chart specs and suggestion payloads.
pub type Record = Map<String, Value>;

/// One row: ordered (column, raw value) pairs. Missing columns read as "".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    cells: Vec<(String, String)>,
}

impl RawRow {
    pub fn new() -> Self { Self::default() }

    /// Insert or replace the value of `key`, keeping first-insertion order.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.cells.iter_mut().find(|(k, _)| *k == key) {
            Some(cell) => cell.1 = value,
            None => self.cells.push((key, value)),
        }
    }

    /// Raw value for `key`; absent keys are the empty string.
    pub fn get(&self, key: &str) -> &str {
        self.cells
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.cells.iter().any(|(k, _)| k == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize { self.cells.len() }
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }

    /// JSON object view with string cells, in column order.
    pub fn to_record(&self) -> Record {
        self.cells
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = RawRow::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}

/// Parsed delimited text. The column set is the key set of the first row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    rows: Vec<RawRow>,
}

impl RawTable {
    pub fn new(rows: Vec<RawRow>) -> Self { Self { rows } }

    pub fn empty() -> Self { Self::default() }

    /// Column names, taken from the first row.
    pub fn columns(&self) -> Vec<String> {
        self.rows
            .first()
            .map(|r| r.keys().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn rows(&self) -> &[RawRow] { &self.rows }
    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Every raw cell of `column`, one per row ("" where the row lacks it).
    pub fn column_values<'a>(&'a self, column: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.rows.iter().map(move |r| r.get(column))
    }

    /// Rows as JSON objects for the rendering path.
    pub fn to_records(&self) -> Vec<Record> {
        self.rows.iter().map(RawRow::to_record).collect()
    }

    /// Build a table from JSON row objects. Non-string cells are stringified, null becomes "".
    pub fn from_records(records: &[Record]) -> Self {
        let rows = records
            .iter()
            .map(|rec| rec.iter().map(|(k, v)| (k.clone(), value_to_cell(v))).collect())
            .collect();
        Self { rows }
    }
}

/// Text form of a JSON cell, used wherever a cell is treated as a string.
pub fn value_to_cell(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
