//! Column profile definition and statistics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{MixsightError, Result};

use super::types::ColumnKind;

/// Statistics for numeric (integer/float) columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericStatistics {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub sum: f64,
}

impl NumericStatistics {
    /// Skew proxy `(mean - median) / std_dev`, substituting 1 for a zero deviation.
    pub fn skew_proxy(&self) -> f64 {
        let spread = if self.std_dev == 0.0 { 1.0 } else { self.std_dev };
        (self.mean - self.median) / spread
    }

    fn validate(&self, subject: &str) -> Result<()> {
        let fields = [
            ("min", self.min),
            ("max", self.max),
            ("mean", self.mean),
            ("median", self.median),
            ("std_dev", self.std_dev),
            ("sum", self.sum),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(MixsightError::invalid(
                subject,
                format!("numeric statistic '{}' is not finite", field),
            ));
        }
        if self.min > self.max {
            return Err(MixsightError::invalid(
                subject,
                format!("min {} exceeds max {}", self.min, self.max),
            ));
        }
        if self.std_dev < 0.0 {
            return Err(MixsightError::invalid(subject, "std_dev is negative"));
        }
        for (field, value) in [("mean", self.mean), ("median", self.median)] {
            if value < self.min || value > self.max {
                return Err(MixsightError::invalid(
                    subject,
                    format!("{} {} lies outside [{}, {}]", field, value, self.min, self.max),
                ));
            }
        }
        Ok(())
    }
}

/// A frequent value of a string column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopValue {
    pub value: String,
    pub count: usize,
}

/// Statistics for string columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringStatistics {
    pub min_length: usize,
    pub max_length: usize,
    /// Number of distinct non-null values.
    pub unique: usize,
    /// Most frequent values, most frequent first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top_values: Vec<TopValue>,
}

/// Statistics for boolean columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanStatistics {
    pub true_count: usize,
    pub false_count: usize,
}

impl BooleanStatistics {
    /// Share of `true` among observed values, or None when nothing was observed.
    pub fn true_proportion(&self) -> Option<f64> {
        let observed = self.observed()?;
        if observed == 0 {
            None
        } else {
            Some(self.true_count as f64 / observed as f64)
        }
    }

    /// `true_count + false_count`, or None when the sum overflows.
    pub fn observed(&self) -> Option<usize> {
        self.true_count.checked_add(self.false_count)
    }

    /// Mean/median/std_dev of the column read as a 0/1 variable.
    pub fn as_numeric(&self) -> Option<NumericStatistics> {
        let p = self.true_proportion()?;
        let median = if p > 0.5 {
            1.0
        } else if p < 0.5 {
            0.0
        } else {
            0.5
        };
        Some(NumericStatistics {
            min: 0.0,
            max: 1.0,
            mean: p,
            median,
            std_dev: (p * (1.0 - p)).sqrt(),
            sum: self.true_count as f64,
        })
    }
}

/// Statistics for date columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateStatistics {
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
}

/// Kind-specific statistics. Exactly one variant is populated per column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ColumnStats {
    Numeric(NumericStatistics),
    String(StringStatistics),
    Boolean(BooleanStatistics),
    Date(DateStatistics),
}

impl ColumnStats {
    /// Distribution summary for columns that can carry distributional evidence.
    pub fn distribution(&self) -> Option<NumericStatistics> {
        match self {
            ColumnStats::Numeric(stats) => Some(stats.clone()),
            ColumnStats::Boolean(stats) => stats.as_numeric(),
            ColumnStats::String(_) | ColumnStats::Date(_) => None,
        }
    }

    fn variant_name(&self) -> &'static str {
        match self {
            ColumnStats::Numeric(_) => "numeric",
            ColumnStats::String(_) => "string",
            ColumnStats::Boolean(_) => "boolean",
            ColumnStats::Date(_) => "date",
        }
    }
}

/// Pre-computed profile of one dataset column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Column name, unique within the dataset.
    pub name: String,
    /// Declared data type.
    pub kind: ColumnKind,
    /// Total number of values (including nulls).
    pub count: usize,
    /// Number of null/missing values.
    pub null_count: usize,
    /// Kind-specific statistics.
    pub stats: ColumnStats,
}

impl ColumnProfile {
    /// Create a new column profile.
    pub fn new(
        name: impl Into<String>,
        kind: ColumnKind,
        count: usize,
        null_count: usize,
        stats: ColumnStats,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            count,
            null_count,
            stats,
        }
    }

    /// Create a numeric column profile.
    pub fn numeric(
        name: impl Into<String>,
        kind: ColumnKind,
        count: usize,
        null_count: usize,
        stats: NumericStatistics,
    ) -> Self {
        Self::new(name, kind, count, null_count, ColumnStats::Numeric(stats))
    }

    /// Number of non-null values.
    pub fn non_null_count(&self) -> usize {
        self.count.saturating_sub(self.null_count)
    }

    /// Get the null percentage.
    pub fn null_percentage(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            (self.null_count as f64 / self.count as f64) * 100.0
        }
    }

    /// Check the profile's internal consistency.
    pub fn validate(&self) -> Result<()> {
        let subject = format!("column '{}'", self.name);

        if self.name.trim().is_empty() {
            return Err(MixsightError::invalid("column", "column name is empty"));
        }
        if self.null_count > self.count {
            return Err(MixsightError::invalid(
                subject,
                format!(
                    "null_count {} exceeds count {}",
                    self.null_count, self.count
                ),
            ));
        }
        if !self.kind.accepts(&self.stats) {
            return Err(MixsightError::invalid(
                subject,
                format!(
                    "declared kind '{}' does not match '{}' statistics",
                    self.kind.as_str(),
                    self.stats.variant_name()
                ),
            ));
        }

        match &self.stats {
            ColumnStats::Numeric(stats) => stats.validate(&subject),
            ColumnStats::String(stats) => {
                if stats.min_length > stats.max_length {
                    return Err(MixsightError::invalid(
                        subject,
                        format!(
                            "min_length {} exceeds max_length {}",
                            stats.min_length, stats.max_length
                        ),
                    ));
                }
                Ok(())
            }
            ColumnStats::Boolean(stats) => {
                let Some(observed) = stats.observed() else {
                    return Err(MixsightError::invalid(
                        subject,
                        "true_count + false_count overflows",
                    ));
                };
                if observed > self.non_null_count() {
                    return Err(MixsightError::invalid(
                        subject,
                        format!(
                            "true_count + false_count ({}) exceeds non-null count {}",
                            observed,
                            self.non_null_count()
                        ),
                    ));
                }
                Ok(())
            }
            ColumnStats::Date(stats) => {
                if stats.earliest > stats.latest {
                    return Err(MixsightError::invalid(
                        subject,
                        format!("earliest {} is after latest {}", stats.earliest, stats.latest),
                    ));
                }
                Ok(())
            }
        }
    }
}

/// Validate every profile and require column names to be unique.
pub fn validate_columns(columns: &[ColumnProfile]) -> Result<()> {
    let mut seen = std::collections::HashSet::new();
    for column in columns {
        column.validate()?;
        if !seen.insert(column.name.as_str()) {
            return Err(MixsightError::invalid(
                format!("column '{}'", column.name),
                "duplicate column name",
            ));
        }
    }
    Ok(())
}
