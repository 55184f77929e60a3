// File: crates/smartstats-core/src/types.rs
// Summary: Shared types and constants (surface sizes, paddings, chart kinds, drawable points).

use serde::{Deserialize, Serialize};

/// Export surface width in pixels.
pub const EXPORT_WIDTH: i32 = 1024;
/// Export surface height in pixels.
pub const EXPORT_HEIGHT: i32 = 640;
/// Interactive card width in pixels.
pub const CARD_WIDTH: i32 = 480;
/// Interactive card height in pixels.
pub const CARD_HEIGHT: i32 = 300;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }

    /// Scale every side by `factor`, rounding to whole pixels.
    pub fn scaled(&self, factor: f32) -> Self {
        let s = |v: u32| (v as f32 * factor).round().max(0.0) as u32;
        Self::new(s(self.left), s(self.right), s(self.top), s(self.bottom))
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(56, 16, 24, 48)
    }
}

/// The five chart kinds a card can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Line,
    Pie,
    Scatter,
    Table,
}

impl ChartType {
    pub const ALL: [ChartType; 5] = [
        ChartType::Bar,
        ChartType::Line,
        ChartType::Pie,
        ChartType::Scatter,
        ChartType::Table,
    ];

    /// Case-insensitive parse. Unknown tags render as a table.
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "bar" => ChartType::Bar,
            "line" => ChartType::Line,
            "pie" => ChartType::Pie,
            "scatter" => ChartType::Scatter,
            _ => ChartType::Table,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Pie => "pie",
            ChartType::Scatter => "scatter",
            ChartType::Table => "table",
        }
    }

    /// Uppercase badge shown on a chart card header.
    pub fn badge(&self) -> String {
        self.as_str().to_ascii_uppercase()
    }
}

impl std::fmt::Display for ChartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row projected to a (label, value) pair for drawing. Never used for statistics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub name: String,
    pub value: f64,
}

impl NormalizedPoint {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        let value = if value.is_finite() { value } else { 0.0 };
        Self { name: name.into(), value }
    }
}
