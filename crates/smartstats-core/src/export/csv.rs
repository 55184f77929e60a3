// File: crates/smartstats-core/src/export/csv.rs
// Summary: CSV export over the union of row keys, quoting only where needed.

use csv::{QuoteStyle, WriterBuilder};

use crate::error::ExportError;
use crate::normalize::union_columns;
use crate::table::{value_to_cell, RawTable, Record};

/// CSV text for `rows`. Columns are every key seen in any row; absent cells are empty.
pub fn records_csv(rows: &[Record]) -> Result<String, ExportError> {
    let columns = union_columns(rows);
    if columns.is_empty() {
        return Ok(String::new());
    }
    let mut w = WriterBuilder::new().quote_style(QuoteStyle::Necessary).from_writer(Vec::new());
    w.write_record(&columns)?;
    for row in rows {
        w.write_record(columns.iter().map(|c| row.get(c).map(value_to_cell).unwrap_or_default()))?;
    }
    let bytes = w.into_inner().map_err(|e| ExportError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

pub fn table_csv(table: &RawTable) -> Result<String, ExportError> {
    records_csv(&table.to_records())
}
