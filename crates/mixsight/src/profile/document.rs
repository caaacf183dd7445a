//! Document profile: qualitative signals extracted from one text document.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{MixsightError, Result};

/// A labelled topic extracted from a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ThemeRepr")]
pub struct Theme {
    pub label: String,
    /// Relative prominence of the theme (0.0-1.0), when the analyzer reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Theme {
    /// Create an unweighted theme.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            weight: None,
        }
    }

    /// Set the theme weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }
}

/// Themes arrive either as bare labels or as `{label, weight}` objects.
#[derive(Deserialize)]
#[serde(untagged)]
enum ThemeRepr {
    Label(String),
    Weighted {
        label: String,
        #[serde(default)]
        weight: Option<f64>,
    },
}

impl From<ThemeRepr> for Theme {
    fn from(repr: ThemeRepr) -> Self {
        match repr {
            ThemeRepr::Label(label) => Theme::new(label),
            ThemeRepr::Weighted { label, weight } => Theme { label, weight },
        }
    }
}

/// Overall tone of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    Positive,
    #[default]
    Neutral,
    Negative,
    Mixed,
}

impl SentimentLabel {
    /// Sign implied by the label alone.
    pub fn sign(&self) -> f64 {
        match self {
            SentimentLabel::Positive => 1.0,
            SentimentLabel::Negative => -1.0,
            SentimentLabel::Neutral | SentimentLabel::Mixed => 0.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Mixed => "mixed",
        }
    }
}

/// Document sentiment: a label plus optional polarity in [-1, 1].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Sentiment {
    pub label: SentimentLabel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polarity: Option<f64>,
}

impl Sentiment {
    /// Create a sentiment with a label and polarity.
    pub fn new(label: SentimentLabel, polarity: Option<f64>) -> Self {
        Self { label, polarity }
    }

    /// Direction of the tone: -1, 0 or +1.
    ///
    /// A non-zero polarity wins; otherwise the label decides.
    pub fn direction(&self) -> f64 {
        match self.polarity {
            Some(p) if p > 0.0 => 1.0,
            Some(p) if p < 0.0 => -1.0,
            _ => self.label.sign(),
        }
    }
}

/// Pre-computed qualitative summary of one text document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentProfile {
    /// Distinct themes, in the order the analyzer reported them.
    #[serde(default)]
    pub themes: Vec<Theme>,
    /// Overall sentiment.
    #[serde(default)]
    pub sentiment: Sentiment,
    /// Distinct keywords, most relevant first.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Free-text summary. Informational only, never scored.
    #[serde(default)]
    pub summary: String,
}

impl DocumentProfile {
    /// Create an empty document profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a theme.
    pub fn with_theme(mut self, theme: impl Into<Theme>) -> Self {
        self.themes.push(theme.into());
        self
    }

    /// Add a keyword.
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    /// Set the sentiment.
    pub fn with_sentiment(mut self, label: SentimentLabel, polarity: Option<f64>) -> Self {
        self.sentiment = Sentiment::new(label, polarity);
        self
    }

    /// Set the summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Check the profile's internal consistency.
    pub fn validate(&self) -> Result<()> {
        check_distinct("theme", self.themes.iter().map(|t| t.label.as_str()))?;
        check_distinct("keyword", self.keywords.iter().map(String::as_str))?;

        for theme in &self.themes {
            if let Some(weight) = theme.weight {
                if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
                    return Err(MixsightError::invalid(
                        format!("theme '{}'", theme.label),
                        format!("weight {} is outside [0, 1]", weight),
                    ));
                }
            }
        }

        if let Some(polarity) = self.sentiment.polarity {
            if !polarity.is_finite() || !(-1.0..=1.0).contains(&polarity) {
                return Err(MixsightError::invalid(
                    "sentiment",
                    format!("polarity {} is outside [-1, 1]", polarity),
                ));
            }
        }

        Ok(())
    }
}

impl From<&str> for Theme {
    fn from(label: &str) -> Self {
        Theme::new(label)
    }
}

impl From<String> for Theme {
    fn from(label: String) -> Self {
        Theme::new(label)
    }
}

/// Labels must be non-empty and unique (case-insensitive, trimmed).
fn check_distinct<'a>(what: &str, labels: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for label in labels {
        let key = label.trim().to_lowercase();
        if key.is_empty() {
            return Err(MixsightError::invalid(what, format!("empty {} label", what)));
        }
        if !seen.insert(key) {
            return Err(MixsightError::invalid(
                format!("{} '{}'", what, label),
                format!("duplicate {} label", what),
            ));
        }
    }
    Ok(())
}
