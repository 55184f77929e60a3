// File: crates/smartstats-core/src/lib.rs
// Summary: Core library entry point; exports the public API for ingestion, statistics, chart geometry and export.

pub mod card;
pub mod chart;
pub mod classify;
pub mod error;
pub mod export;
pub mod geometry;
pub mod grid;
pub mod handoff;
pub mod normalize;
pub mod paint;
pub mod parser;
pub mod profile;
pub mod scale;
pub mod stats;
pub mod suggestion;
pub mod svg;
pub mod table;
pub mod text;
pub mod theme;
pub mod types;

pub use card::{CardState, ChartCard, ExportState, RasterBackend};
pub use chart::{ChartDraft, ChartSpec, PieLabelStyle, RenderOptions};
pub use classify::ColumnKind;
pub use error::{Error, ExportError, HandoffError, InputError, RenderError, Result, SuggestionError};
pub use geometry::{compute_geometry, Body, Geometry};
pub use handoff::{Claim, FileStore, HandoffPayload, HandoffSlot, KeyValueStore, MemoryStore};
pub use normalize::{normalize_records, sanitize_records};
pub use paint::{paint, Surface};
pub use parser::{parse_delimited, parse_table};
pub use profile::{profile_table, Analysis, ColumnProfile, DatasetProfile};
pub use stats::{ColumnStats, CategoricalStats, Mode, NumericStats};
pub use suggestion::{resolve_stats, Suggestion, SuggestionRequest, SuggestionResponse, SuggestionService};
pub use svg::render_svg;
pub use table::{RawRow, RawTable, Record};
pub use theme::{Rgba, Theme};
pub use types::{ChartType, Insets, NormalizedPoint};
