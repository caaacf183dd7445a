//! Templated prose summary of an analysis.
//!
//! Rendering is a pure function of its inputs: identical inputs produce
//! byte-identical narratives.

use serde::{Deserialize, Serialize};

use crate::error::{MixsightError, Result};
use crate::insight::{Confidence, Insight};

/// Configuration for narrative composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativeConfig {
    /// Number of top insights summarized in the narrative.
    pub top_insights: usize,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self { top_insights: 3 }
    }
}

impl NarrativeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.top_insights == 0 {
            return Err(MixsightError::Config(
                "narrative.top_insights must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Composes a short narrative from dataset/document names and insights.
#[derive(Debug, Clone, Default)]
pub struct NarrativeComposer {
    config: NarrativeConfig,
}

impl NarrativeComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: NarrativeConfig) -> Self {
        Self { config }
    }

    /// Compose the narrative. `insights` must already be ranked.
    pub fn compose(
        &self,
        dataset_name: &str,
        document_name: Option<&str>,
        insights: &[Insight],
    ) -> String {
        let mut sentences = vec![opening(dataset_name, document_name)];

        if insights.is_empty() {
            if document_name.is_none() {
                sentences.push(
                    "No document was supplied, so no qualitative signals could be linked \
                     to the quantitative columns."
                        .to_string(),
                );
            }
            sentences.push("No strong mixed-methods associations were found.".to_string());
            sentences.push(
                "Recommendation: gather more data, such as additional documents or more \
                 complete columns, before drawing conclusions."
                    .to_string(),
            );
            return sentences.join(" ");
        }

        sentences.push(count_sentence(insights));
        sentences.extend(
            insights
                .iter()
                .take(self.config.top_insights)
                .map(|insight| insight.statement.clone()),
        );
        sentences.push(recommendation(insights).to_string());

        sentences.join(" ")
    }
}

fn opening(dataset_name: &str, document_name: Option<&str>) -> String {
    match document_name {
        Some(document) => format!(
            "Analysis of dataset '{}' against document '{}'.",
            dataset_name, document
        ),
        None => format!(
            "Analysis of dataset '{}' with no accompanying document.",
            dataset_name
        ),
    }
}

fn count_sentence(insights: &[Insight]) -> String {
    let tier_count = |tier: Confidence| insights.iter().filter(|i| i.confidence == tier).count();
    format!(
        "Found {} significant association{}: {} high, {} medium and {} low confidence.",
        insights.len(),
        if insights.len() == 1 { "" } else { "s" },
        tier_count(Confidence::High),
        tier_count(Confidence::Medium),
        tier_count(Confidence::Low)
    )
}

fn recommendation(insights: &[Insight]) -> &'static str {
    if insights.iter().any(|i| i.confidence == Confidence::High) {
        "Recommendation: validate the high-confidence associations with a targeted \
         follow-up before acting on them."
    } else {
        "Recommendation: treat these associations as exploratory and corroborate them \
         with additional data."
    }
}
