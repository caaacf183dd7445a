//! Correlation record types.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Signal label used for the document-wide sentiment signal.
pub const SENTIMENT_LABEL: &str = "overall";

/// Kind of qualitative signal a column was paired with.
///
/// Declaration order is the final tie-break when ranking records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    Theme,
    Sentiment,
    Keyword,
}

impl SignalKind {
    /// Singular noun for rendering.
    pub fn noun(&self) -> &'static str {
        match self {
            SignalKind::Theme => "theme",
            SignalKind::Sentiment => "sentiment",
            SignalKind::Keyword => "keyword",
        }
    }
}

/// How a record's strength was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvidenceBasis {
    /// Column name and signal label share tokens.
    LexicalMatch,
    /// Column distribution skews with or against the document tone.
    Distributional,
    /// Both of the above.
    Combined,
}

impl EvidenceBasis {
    pub fn label(&self) -> &'static str {
        match self {
            EvidenceBasis::LexicalMatch => "lexical",
            EvidenceBasis::Distributional => "distributional",
            EvidenceBasis::Combined => "combined",
        }
    }
}

/// A scored association between one column and one signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationRecord {
    pub column_name: String,
    pub signal_kind: SignalKind,
    /// Theme or keyword label, or [`SENTIMENT_LABEL`] for sentiment.
    pub signal_label: String,
    /// Signed strength in [-1, 1].
    pub strength: f64,
    pub basis: EvidenceBasis,
    /// Lexical component, when lexical evidence contributed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lexical: Option<f64>,
    /// Distributional component, when distributional evidence contributed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distributional: Option<f64>,
}

impl CorrelationRecord {
    /// Magnitude of the association.
    pub fn magnitude(&self) -> f64 {
        self.strength.abs()
    }
}

/// Ranking order: `|strength|` descending, then column name, signal label
/// and signal kind ascending.
pub fn compare_records(a: &CorrelationRecord, b: &CorrelationRecord) -> Ordering {
    b.magnitude()
        .total_cmp(&a.magnitude())
        .then_with(|| tie_break(a, b))
}

/// Deterministic tie-break shared with insight ranking.
pub(crate) fn tie_break(a: &CorrelationRecord, b: &CorrelationRecord) -> Ordering {
    a.column_name
        .cmp(&b.column_name)
        .then_with(|| a.signal_label.cmp(&b.signal_label))
        .then_with(|| a.signal_kind.cmp(&b.signal_kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(column: &str, label: &str, strength: f64) -> CorrelationRecord {
        CorrelationRecord {
            column_name: column.to_string(),
            signal_kind: SignalKind::Theme,
            signal_label: label.to_string(),
            strength,
            basis: EvidenceBasis::LexicalMatch,
            lexical: Some(strength),
            distributional: None,
        }
    }

    #[test]
    fn test_magnitude_orders_before_name() {
        let mut records = vec![record("a", "x", 0.2), record("b", "x", -0.9)];
        records.sort_by(compare_records);
        assert_eq!(records[0].column_name, "b");
    }

    #[test]
    fn test_ties_break_alphabetically() {
        let mut records = vec![
            record("income", "growth", 0.5),
            record("age", "growth", 0.5),
            record("age", "aging", 0.5),
        ];
        records.sort_by(compare_records);
        let order: Vec<_> = records
            .iter()
            .map(|r| (r.column_name.as_str(), r.signal_label.as_str()))
            .collect();
        assert_eq!(order, vec![("age", "aging"), ("age", "growth"), ("income", "growth")]);
    }

    #[test]
    fn test_basis_serializes_kebab_case() {
        let json = serde_json::to_string(&EvidenceBasis::LexicalMatch).unwrap();
        assert_eq!(json, "\"lexical-match\"");
    }
}
