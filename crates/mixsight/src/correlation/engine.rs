//! Correlation engine - pairs every eligible column with every signal.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{MixsightError, Result};
use crate::profile::{validate_columns, ColumnProfile, DocumentProfile};

use super::distributional::distributional_score;
use super::lexical::{overlap_ratio, token_set};
use super::record::{compare_records, CorrelationRecord, EvidenceBasis, SignalKind, SENTIMENT_LABEL};

/// Configuration for correlation scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrelationConfig {
    /// Minimum non-null values a column needs to be paired with signals.
    pub min_samples: usize,
    /// Weight of lexical evidence when both kinds are present (0.0-1.0).
    pub lexical_weight: f64,
    /// Weight of distributional evidence when both kinds are present (0.0-1.0).
    pub distributional_weight: f64,
    /// Skip keywords whose tokens equal some theme's tokens.
    pub dedupe_keywords_against_themes: bool,
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            min_samples: 3,
            lexical_weight: 0.5,
            distributional_weight: 0.5,
            dedupe_keywords_against_themes: false,
        }
    }
}

impl CorrelationConfig {
    /// Check that weights are usable.
    pub fn validate(&self) -> Result<()> {
        for (name, weight) in [
            ("lexical_weight", self.lexical_weight),
            ("distributional_weight", self.distributional_weight),
        ] {
            if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
                return Err(MixsightError::Config(format!(
                    "correlation.{} must be within [0, 1], got {}",
                    name, weight
                )));
            }
        }
        Ok(())
    }
}

/// A qualitative signal prepared for scoring.
#[derive(Debug)]
struct Signal {
    kind: SignalKind,
    label: String,
    tokens: BTreeSet<String>,
}

/// Scores column/signal pairs and ranks the resulting records.
#[derive(Debug, Clone, Default)]
pub struct CorrelationEngine {
    config: CorrelationConfig,
}

impl CorrelationEngine {
    /// Create an engine with default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom configuration.
    pub fn with_config(config: CorrelationConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &CorrelationConfig {
        &self.config
    }

    /// Compute ranked correlation records.
    ///
    /// Returns an empty sequence when there are no columns or no document.
    /// Fails only when a profile is malformed.
    pub fn compute(
        &self,
        columns: &[ColumnProfile],
        document: Option<&DocumentProfile>,
    ) -> Result<Vec<CorrelationRecord>> {
        validate_columns(columns)?;
        let Some(document) = document else {
            return Ok(Vec::new());
        };
        document.validate()?;

        let signals = self.collect_signals(document);
        let mut records: Vec<CorrelationRecord> = columns
            .iter()
            .filter(|column| self.is_eligible(column))
            .flat_map(|column| self.score_column(column, document, &signals))
            .collect();

        records.sort_by(compare_records);
        Ok(records)
    }

    /// A column needs `min_samples` non-null values to support an association.
    pub fn is_eligible(&self, column: &ColumnProfile) -> bool {
        column.non_null_count() >= self.config.min_samples && column.non_null_count() > 0
    }

    /// Themes, keywords and the sentiment, in that order.
    fn collect_signals(&self, document: &DocumentProfile) -> Vec<Signal> {
        let mut signals: Vec<Signal> = document
            .themes
            .iter()
            .map(|theme| Signal {
                kind: SignalKind::Theme,
                label: theme.label.clone(),
                tokens: token_set(&theme.label),
            })
            .collect();

        let theme_tokens: Vec<BTreeSet<String>> =
            signals.iter().map(|s| s.tokens.clone()).collect();

        for keyword in &document.keywords {
            let tokens = token_set(keyword);
            if self.config.dedupe_keywords_against_themes
                && !tokens.is_empty()
                && theme_tokens.contains(&tokens)
            {
                continue;
            }
            signals.push(Signal {
                kind: SignalKind::Keyword,
                label: keyword.clone(),
                tokens,
            });
        }

        signals.push(Signal {
            kind: SignalKind::Sentiment,
            label: SENTIMENT_LABEL.to_string(),
            tokens: token_set(document.sentiment.label.as_str()),
        });

        signals
    }

    /// Score one column against every signal, dropping pairs without evidence.
    fn score_column(
        &self,
        column: &ColumnProfile,
        document: &DocumentProfile,
        signals: &[Signal],
    ) -> Vec<CorrelationRecord> {
        let column_tokens = token_set(&column.name);

        signals
            .iter()
            .filter_map(|signal| {
                let lexical = Some(overlap_ratio(&column_tokens, &signal.tokens))
                    .filter(|score| *score > 0.0);
                // Sentiment pairs only with columns that carry a distribution.
                let distributional = match signal.kind {
                    SignalKind::Sentiment => {
                        Some(distributional_score(column, &document.sentiment)?)
                    }
                    SignalKind::Theme | SignalKind::Keyword => None,
                };

                let (strength, basis) = self.combine(lexical, distributional)?;
                Some(CorrelationRecord {
                    column_name: column.name.clone(),
                    signal_kind: signal.kind,
                    signal_label: signal.label.clone(),
                    strength,
                    basis,
                    lexical,
                    distributional,
                })
            })
            .collect()
    }

    /// Merge the available evidence into a strength in [-1, 1].
    fn combine(
        &self,
        lexical: Option<f64>,
        distributional: Option<f64>,
    ) -> Option<(f64, EvidenceBasis)> {
        let (strength, basis) = match (lexical, distributional) {
            (Some(l), Some(d)) => (
                l * self.config.lexical_weight + d * self.config.distributional_weight,
                EvidenceBasis::Combined,
            ),
            (Some(l), None) => (l, EvidenceBasis::LexicalMatch),
            (None, Some(d)) => (d, EvidenceBasis::Distributional),
            (None, None) => return None,
        };

        let strength = strength.clamp(-1.0, 1.0);
        if strength == 0.0 || !strength.is_finite() {
            None
        } else {
            Some((strength, basis))
        }
    }
}
