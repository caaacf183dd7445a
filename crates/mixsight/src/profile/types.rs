//! Core type definitions for profile representation.

use serde::{Deserialize, Serialize};

use super::column::ColumnStats;

/// Declared data type of a dataset column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Text/string values.
    String,
    /// Whole numbers.
    Integer,
    /// Floating-point numbers.
    Float,
    /// Calendar dates.
    Date,
    /// Boolean values (true/false).
    Boolean,
}

impl ColumnKind {
    /// Returns true if this kind is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnKind::Integer | ColumnKind::Float)
    }

    /// Returns true if a column of this kind can carry distributional evidence.
    pub fn supports_distribution(&self) -> bool {
        self.is_numeric() || matches!(self, ColumnKind::Boolean)
    }

    /// Returns true if `stats` is the variant this kind requires.
    pub fn accepts(&self, stats: &ColumnStats) -> bool {
        matches!(
            (self, stats),
            (ColumnKind::Integer | ColumnKind::Float, ColumnStats::Numeric(_))
                | (ColumnKind::String, ColumnStats::String(_))
                | (ColumnKind::Boolean, ColumnStats::Boolean(_))
                | (ColumnKind::Date, ColumnStats::Date(_))
        )
    }

    /// Lowercase name used in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::String => "string",
            ColumnKind::Integer => "integer",
            ColumnKind::Float => "float",
            ColumnKind::Date => "date",
            ColumnKind::Boolean => "boolean",
        }
    }
}
