// File: crates/smartstats-core/src/export/mod.rs
// Summary: Export serializers (JSON, CSV, text report) and whole-file writes.

mod csv;
mod json;
mod report;

pub use self::csv::{records_csv, table_csv};
pub use self::json::chart_json;
pub use self::report::{text_report, BANNER_WIDTH, FREQUENCY_BAR_WIDTH};

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ExportError;

/// File name derived from a chart title: alphanumerics only, lowercased.
pub fn export_file_name(title: &str, extension: &str) -> String {
    let stem: String = title
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    let stem = if stem.is_empty() { "chart".to_string() } else { stem };
    format!("{stem}.{}", extension.trim_start_matches('.'))
}

/// Write `bytes` to `dir/name` through a temporary file so a failed export leaves nothing behind.
pub fn write_export(dir: &Path, name: &str, bytes: &[u8]) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir)?;
    let target = dir.join(name);
    let tmp = dir.join(format!(".{name}.partial"));
    let written = std::fs::File::create(&tmp).and_then(|mut f| {
        f.write_all(bytes)?;
        f.sync_all()
    });
    if let Err(e) = written.and_then(|_| std::fs::rename(&tmp, &target)) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e.into());
    }
    info!(path = %target.display(), bytes = bytes.len(), "export written");
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_strip_punctuation() {
        assert_eq!(export_file_name("Q3 Sales: 2024!", "csv"), "q3sales2024.csv");
        assert_eq!(export_file_name("***", ".json"), "chart.json");
    }
}
