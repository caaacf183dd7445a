//! Rule-based insight generation from correlation records.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::correlation::{compare_records, CorrelationRecord, SignalKind};
use crate::error::{MixsightError, Result};

use super::{Confidence, Insight};

/// Configuration for insight derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightConfig {
    /// Minimum `|strength|` for a record to support an insight (inclusive).
    pub significance: f64,
    /// Minimum `|strength|` for high confidence.
    pub high_threshold: f64,
    /// Minimum `|strength|` for medium confidence.
    pub medium_threshold: f64,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            significance: 0.35,
            high_threshold: 0.7,
            medium_threshold: 0.5,
        }
    }
}

impl InsightConfig {
    /// Check that thresholds are usable.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("significance", self.significance),
            ("high_threshold", self.high_threshold),
            ("medium_threshold", self.medium_threshold),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(MixsightError::Config(format!(
                    "insight.{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        if self.medium_threshold > self.high_threshold {
            return Err(MixsightError::Config(format!(
                "insight.medium_threshold {} exceeds insight.high_threshold {}",
                self.medium_threshold, self.high_threshold
            )));
        }
        Ok(())
    }

    /// Map a strength to its confidence tier.
    pub fn confidence_for(&self, strength: f64) -> Confidence {
        let magnitude = strength.abs();
        if magnitude >= self.high_threshold {
            Confidence::High
        } else if magnitude >= self.medium_threshold {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

/// Records sharing a column and signal kind, strongest first.
struct Group<'a> {
    lead: &'a CorrelationRecord,
    members: Vec<&'a CorrelationRecord>,
    confidence: Confidence,
}

/// Derives ranked insights from correlation records.
#[derive(Debug, Clone, Default)]
pub struct InsightGenerator {
    config: InsightConfig,
}

impl InsightGenerator {
    /// Create a generator with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom configuration.
    pub fn with_config(config: InsightConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &InsightConfig {
        &self.config
    }

    /// Derive insights using the configured significance threshold.
    pub fn derive(&self, records: &[CorrelationRecord]) -> Vec<Insight> {
        self.derive_at(records, self.config.significance)
    }

    /// Derive insights from records with `|strength| >= significance`.
    ///
    /// Each `(column, signal kind)` pair yields at most one insight. An empty
    /// result means nothing cleared the threshold.
    pub fn derive_at(&self, records: &[CorrelationRecord], significance: f64) -> Vec<Insight> {
        let mut significant: Vec<&CorrelationRecord> = records
            .iter()
            .filter(|r| r.magnitude() >= significance)
            .collect();
        significant.sort_by(|a, b| compare_records(a, b));

        let mut grouped: IndexMap<(&str, SignalKind), Vec<&CorrelationRecord>> = IndexMap::new();
        for record in significant {
            grouped
                .entry((record.column_name.as_str(), record.signal_kind))
                .or_default()
                .push(record);
        }

        let mut groups: Vec<Group> = grouped
            .into_values()
            .map(|members| {
                let lead = members[0];
                Group {
                    lead,
                    confidence: self.config.confidence_for(lead.strength),
                    members,
                }
            })
            .collect();
        groups.sort_by(compare_groups);

        groups.iter().map(render_insight).collect()
    }
}

/// Confidence tier, then `|strength|`, then supporting records, then names.
fn compare_groups(a: &Group, b: &Group) -> Ordering {
    b.confidence
        .cmp(&a.confidence)
        .then_with(|| b.lead.magnitude().total_cmp(&a.lead.magnitude()))
        .then_with(|| b.members.len().cmp(&a.members.len()))
        .then_with(|| compare_records(a.lead, b.lead))
}

fn render_insight(group: &Group) -> Insight {
    let lead = group.lead;
    let related_signals: BTreeSet<String> = group
        .members
        .iter()
        .map(|r| r.signal_label.clone())
        .collect();

    Insight {
        statement: render_statement(lead, group.members.len() - 1),
        confidence: group.confidence,
        related_columns: BTreeSet::from([lead.column_name.clone()]),
        related_signals,
        signal_kind: lead.signal_kind,
        strength: lead.strength,
        supporting_records: group.members.len(),
    }
}

/// Render the statement for a group led by `lead` with `others` further records.
fn render_statement(lead: &CorrelationRecord, others: usize) -> String {
    let direction = if lead.strength >= 0.0 { "rise" } else { "fall" };
    let signal = match lead.signal_kind {
        SignalKind::Theme => format!("the theme \"{}\"", lead.signal_label),
        SignalKind::Keyword => format!("the keyword \"{}\"", lead.signal_label),
        SignalKind::Sentiment => "the overall document sentiment".to_string(),
    };

    let mut statement = format!(
        "Column '{}' tends to {} with {} (strength {:+.2}, {} evidence)",
        lead.column_name,
        direction,
        signal,
        lead.strength,
        lead.basis.label()
    );
    if others > 0 {
        statement.push_str(&format!(
            "; {} related {}{} also cleared the threshold",
            others,
            lead.signal_kind.noun(),
            if others == 1 { "" } else { "s" }
        ));
    }
    statement.push('.');
    statement
}
