// File: crates/smartstats-core/src/parser.rs
// Summary: Splits raw delimited text into a header and row records.
//
// Limitation: fields are split on a bare delimiter. Quoting and escaping are not
// recognised on ingestion, so a field cannot contain the delimiter. The one quoted
// form understood is a whole field of `""`, which reads as an empty cell; CSV
// export writes it for a row whose only field is empty.

use tracing::{debug, warn};

use crate::table::{RawRow, RawTable};

/// Delimiter used for pasted and uploaded text.
pub const DEFAULT_DELIMITER: char = ',';

/// Parse comma-separated text. See [`parse_delimited`].
pub fn parse_table(text: &str) -> RawTable {
    parse_delimited(text, DEFAULT_DELIMITER)
}

/// Parse `text` whose first non-blank line is the header.
///
/// Never fails: empty input yields an empty table, short rows are padded with
/// empty strings and surplus fields beyond the header are dropped.
pub fn parse_delimited(text: &str, delimiter: char) -> RawTable {
    let mut lines = text
        .trim()
        .lines()
        .map(|l| l.trim_end_matches('\r'))
        .filter(|l| !l.trim().is_empty());

    let Some(header_line) = lines.next() else {
        debug!("empty input; returning empty table");
        return RawTable::empty();
    };
    let headers: Vec<&str> = header_line.split(delimiter).map(field).collect();

    let mut rows = Vec::new();
    let mut ragged = 0usize;
    for line in lines {
        let fields: Vec<&str> = line.split(delimiter).map(field).collect();
        if fields.len() != headers.len() {
            ragged += 1;
        }
        let row: RawRow = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (*h, fields.get(i).copied().unwrap_or("")))
            .collect();
        rows.push(row);
    }

    if ragged > 0 {
        warn!(ragged, "rows with a field count different from the header were padded or cut");
    }
    debug!(columns = headers.len(), rows = rows.len(), "parsed delimited text");
    RawTable::new(rows)
}

fn field(raw: &str) -> &str {
    match raw.trim() {
        "\"\"" => "",
        s => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_only_yields_no_rows() {
        let t = parse_table("a,b\n");
        assert_eq!(t.row_count(), 0);
        assert!(t.columns().is_empty());
    }

    #[test]
    fn crlf_and_blank_lines() {
        let t = parse_table("x,y\r\n1,2\r\n\r\n3,4\r\n");
        assert_eq!(t.row_count(), 2);
        assert_eq!(t.rows()[1].get("y"), "4");
    }

    #[test]
    fn quoted_empty_field_reads_as_empty() {
        let t = parse_table("note\nhello\n\"\"\n");
        assert_eq!(t.row_count(), 2);
        assert_eq!(t.rows()[1].get("note"), "");
        assert_eq!(parse_table("a,b\n\"\",1").rows()[0].get("a"), "");
    }
}
