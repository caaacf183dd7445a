//! Insight types.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::correlation::SignalKind;

/// Confidence tier of an insight, monotone in `|strength|`.
///
/// Ordered so that `High` compares greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

/// A human-readable finding backed by one or more correlation records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// Rendered statement.
    pub statement: String,

    /// Confidence tier of the leading record.
    pub confidence: Confidence,

    /// Columns the insight is about.
    pub related_columns: BTreeSet<String>,

    /// Signal labels backing the insight.
    pub related_signals: BTreeSet<String>,

    /// Kind of signal every supporting record shares.
    pub signal_kind: SignalKind,

    /// Strength of the leading record.
    pub strength: f64,

    /// Number of records that cleared the threshold for this insight.
    pub supporting_records: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_ordering() {
        assert!(Confidence::High > Confidence::Medium);
        assert!(Confidence::Medium > Confidence::Low);
    }

    #[test]
    fn test_confidence_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Confidence::High).unwrap(), "\"high\"");
        assert_eq!(Confidence::Medium.label(), "medium");
    }
}
