// File: crates/smartstats-core/src/normalize.rs
// Summary: Best-effort projection of arbitrary-keyed rows to (name, value) points for drawing.
//
// The name column is the first key whose cell does not parse as a number (empty and
// null cells included), the value column the first key whose cell does. When a row
// has no such split the first and second keys are used positionally. Rows with
// several numeric columns always chart the first one.

use serde_json::Value;

use crate::classify::parse_number;
use crate::table::{value_to_cell, Record};
use crate::types::NormalizedPoint;

/// Replace null cells with "". Idempotent.
pub fn sanitize_cell(v: &Value) -> Value {
    match v {
        Value::Null => Value::String(String::new()),
        other => other.clone(),
    }
}

/// Sanitize every cell of a row.
pub fn sanitize_record(rec: &Record) -> Record {
    rec.iter().map(|(k, v)| (k.clone(), sanitize_cell(v))).collect()
}

/// Sanitize every row, filling keys absent from a row (but present in another) with "".
pub fn sanitize_records(records: &[Record]) -> Vec<Record> {
    let columns = union_columns(records);
    records
        .iter()
        .map(|rec| {
            columns
                .iter()
                .map(|c| (c.clone(), rec.get(c).map(sanitize_cell).unwrap_or_else(|| Value::String(String::new()))))
                .collect()
        })
        .collect()
}

/// Keys across all rows, in first-seen order.
pub fn union_columns(records: &[Record]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for rec in records {
        for k in rec.keys() {
            if !out.iter().any(|c| c == k) {
                out.push(k.clone());
            }
        }
    }
    out
}

/// Number held by a cell, if it looks numeric.
pub fn numeric_cell(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64().filter(|x| x.is_finite()),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

/// Keys chosen to project a row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeySelection {
    pub name_key: String,
    pub value_key: String,
}

/// Choose the (name, value) keys for a row. `None` for a row with no keys.
pub fn select_keys(rec: &Record) -> Option<KeySelection> {
    let name = rec.iter().find(|(_, v)| numeric_cell(v).is_none()).map(|(k, _)| k);
    let value = rec.iter().find(|(_, v)| numeric_cell(v).is_some()).map(|(k, _)| k);
    if let (Some(n), Some(v)) = (name, value) {
        return Some(KeySelection { name_key: n.clone(), value_key: v.clone() });
    }
    let mut keys = rec.keys();
    let first = keys.next()?;
    let second = keys.next().unwrap_or(first);
    Some(KeySelection { name_key: first.clone(), value_key: second.clone() })
}

/// Project one row. Missing values become 0, missing names "".
pub fn normalize_record(rec: &Record) -> NormalizedPoint {
    let Some(sel) = select_keys(rec) else {
        return NormalizedPoint::new("", 0.0);
    };
    let name = rec.get(&sel.name_key).map(value_to_cell).unwrap_or_default();
    let value = rec.get(&sel.value_key).and_then(numeric_cell).unwrap_or(0.0);
    NormalizedPoint::new(name, value)
}

pub fn normalize_records(records: &[Record]) -> Vec<NormalizedPoint> {
    records.iter().map(normalize_record).collect()
}
