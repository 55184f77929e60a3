// File: crates/smartstats-core/src/profile.rs
// Summary: Per-column profiles and the dataset overview produced by one ingestion.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::classify::{classify_column, ColumnKind};
use crate::parser::parse_table;
use crate::stats::{categorical_stats, numeric_stats, ColumnStats};
use crate::table::RawTable;

/// Computed summary for one column. Immutable once built.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColumnProfile {
    pub name: String,
    pub kind: ColumnKind,
    pub stats: ColumnStats,
}

/// Overview plus column profiles, in header order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetProfile {
    pub rows: usize,
    pub columns: usize,
    pub column_names: Vec<String>,
    pub numeric_columns: Vec<String>,
    pub categorical_columns: Vec<String>,
    pub column_stats: Vec<ColumnProfile>,
}

impl DatasetProfile {
    pub fn column(&self, name: &str) -> Option<&ColumnProfile> {
        self.column_stats.iter().find(|c| c.name == name)
    }
}

/// Profile one column of `table`. Statistics use the parsed cell values only.
pub fn profile_column(table: &RawTable, name: &str) -> ColumnProfile {
    let classified = classify_column(name, table.column_values(name));
    let stats = match classified.kind {
        ColumnKind::Numeric => ColumnStats::Numeric(numeric_stats(&classified.numbers, classified.total)),
        ColumnKind::Categorical => ColumnStats::Categorical(categorical_stats(&classified.present, classified.total)),
    };
    debug!(column = name, kind = ?classified.kind, used = stats.count(), nulls = stats.null_count(), "profiled column");
    ColumnProfile { name: name.to_string(), kind: classified.kind, stats }
}

/// Profile every column of `table`.
pub fn profile_table(table: &RawTable) -> DatasetProfile {
    let column_names = table.columns();
    let column_stats: Vec<ColumnProfile> = column_names.iter().map(|c| profile_column(table, c)).collect();
    let by_kind = |kind: ColumnKind| {
        column_stats
            .iter()
            .filter(|c| c.kind == kind)
            .map(|c| c.name.clone())
            .collect::<Vec<_>>()
    };
    let profile = DatasetProfile {
        rows: table.row_count(),
        columns: column_names.len(),
        numeric_columns: by_kind(ColumnKind::Numeric),
        categorical_columns: by_kind(ColumnKind::Categorical),
        column_names,
        column_stats,
    };
    info!(
        rows = profile.rows,
        numeric = profile.numeric_columns.len(),
        categorical = profile.categorical_columns.len(),
        "ingestion profiled"
    );
    profile
}

/// Holds the most recent ingestion. Each ingest swaps in a whole new profile.
#[derive(Clone, Debug, Default)]
pub struct Analysis {
    table: Arc<RawTable>,
    profile: Arc<DatasetProfile>,
}

impl Analysis {
    pub fn new() -> Self { Self::default() }

    /// Parse and profile `raw`, replacing the previous result.
    pub fn ingest(&mut self, raw: &str) -> Arc<DatasetProfile> {
        let table = parse_table(raw);
        self.ingest_table(table)
    }

    pub fn ingest_table(&mut self, table: RawTable) -> Arc<DatasetProfile> {
        let profile = Arc::new(profile_table(&table));
        self.table = Arc::new(table);
        self.profile = Arc::clone(&profile);
        profile
    }

    pub fn table(&self) -> Arc<RawTable> { Arc::clone(&self.table) }
    pub fn profile(&self) -> Arc<DatasetProfile> { Arc::clone(&self.profile) }
}
