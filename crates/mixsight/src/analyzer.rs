//! Analyzer: runs correlation, insight and narrative stages end to end.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::AnalyzerConfig;
use crate::correlation::{CorrelationEngine, CorrelationRecord};
use crate::error::{MixsightError, Result};
use crate::insight::{Insight, InsightGenerator};
use crate::narrative::NarrativeComposer;
use crate::profile::{validate_columns, ColumnProfile, DocumentProfile};

/// A named document profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentInput {
    /// Display name of the document.
    pub name: String,
    /// Signals extracted from the document.
    pub profile: DocumentProfile,
}

/// Everything one analysis needs: a profiled dataset and an optional document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Display name of the dataset.
    pub dataset_name: String,
    /// One profile per dataset column.
    #[serde(default)]
    pub columns: Vec<ColumnProfile>,
    /// The document to link against, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<DocumentInput>,
}

impl AnalysisRequest {
    /// Create a request with no columns and no document.
    pub fn new(dataset_name: impl Into<String>) -> Self {
        Self {
            dataset_name: dataset_name.into(),
            columns: Vec::new(),
            document: None,
        }
    }

    /// Set the column profiles.
    pub fn with_columns(mut self, columns: Vec<ColumnProfile>) -> Self {
        self.columns = columns;
        self
    }

    /// Attach a document.
    pub fn with_document(mut self, name: impl Into<String>, profile: DocumentProfile) -> Self {
        self.document = Some(DocumentInput {
            name: name.into(),
            profile,
        });
        self
    }

    /// Check every column and the document.
    pub fn validate(&self) -> Result<()> {
        validate_columns(&self.columns)?;
        if let Some(document) = &self.document {
            document.profile.validate()?;
        }
        Ok(())
    }

    /// Hex SHA-256 of the request and config, usable as a cache key.
    pub fn fingerprint(&self, config: &AnalyzerConfig) -> Result<String> {
        let mut hasher = Sha256::new();
        hasher.update(serde_json::to_vec(self)?);
        hasher.update(serde_json::to_vec(config)?);
        Ok(format!("{:x}", hasher.finalize()))
    }

    /// Load a request from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| MixsightError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

/// Output of an analysis: ranked correlations, ranked insights and a narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationAnalysisResult {
    /// Records ranked by `|strength|` descending.
    pub correlations: Vec<CorrelationRecord>,
    /// Insights ranked by confidence tier, then strength.
    pub insights: Vec<Insight>,
    /// Prose summary of the top insights.
    pub narrative: String,
}

impl CorrelationAnalysisResult {
    /// Save the result as pretty JSON, creating parent directories if needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let io_err = |source| MixsightError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self).map_err(|e| {
            if e.is_io() {
                io_err(e.into())
            } else {
                MixsightError::from(e)
            }
        })?;
        writer.flush().map_err(io_err)?;
        Ok(())
    }
}

/// Runs the full pipeline with one configuration.
///
/// The analyzer holds no per-call state, so one instance can serve any number
/// of concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
    correlation: CorrelationEngine,
    insights: InsightGenerator,
    narrative: NarrativeComposer,
}

impl Analyzer {
    /// Create an analyzer with default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with custom configuration.
    ///
    /// The configuration is used as given; configs read through
    /// [`AnalyzerConfig::load`] or [`AnalyzerConfig::from_toml_str`] are
    /// already validated.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self {
            correlation: CorrelationEngine::with_config(config.correlation.clone()),
            insights: InsightGenerator::with_config(config.insight.clone()),
            narrative: NarrativeComposer::with_config(config.narrative.clone()),
            config,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze a request.
    ///
    /// Fails only with [`MixsightError::InvalidInput`] when a profile is
    /// malformed; every other outcome is a (possibly empty) result.
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<CorrelationAnalysisResult> {
        // The correlation stage validates every column and the document.
        let document = request.document.as_ref();
        let correlations = self
            .correlation
            .compute(&request.columns, document.map(|d| &d.profile))?;
        let insights = self.insights.derive(&correlations);
        let narrative = self.narrative.compose(
            &request.dataset_name,
            document.map(|d| d.name.as_str()),
            &insights,
        );

        Ok(CorrelationAnalysisResult {
            correlations,
            insights,
            narrative,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{ColumnKind, NumericStatistics, SentimentLabel};
    use tempfile::TempDir;

    fn request() -> AnalysisRequest {
        AnalysisRequest::new("sales_2024")
            .with_columns(vec![ColumnProfile::numeric(
                "revenue",
                ColumnKind::Integer,
                100,
                0,
                NumericStatistics {
                    min: 100.0,
                    max: 20000.0,
                    mean: 5000.0,
                    median: 4800.0,
                    std_dev: 1200.0,
                    sum: 500000.0,
                },
            )])
            .with_document(
                "q3_review.txt",
                DocumentProfile::new()
                    .with_theme("revenue growth")
                    .with_keyword("revenue")
                    .with_sentiment(SentimentLabel::Positive, Some(0.6)),
            )
    }

    #[test]
    fn test_analyze_full_pipeline() {
        let result = Analyzer::new().analyze(&request()).unwrap();
        assert_eq!(result.correlations.len(), 3);
        // keyword (1.0) and theme (0.5) clear 0.35, sentiment (0.17) does not
        assert_eq!(result.insights.len(), 2);
        assert!(result
            .narrative
            .starts_with("Analysis of dataset 'sales_2024' against document 'q3_review.txt'."));
    }

    #[test]
    fn test_analyze_without_document() {
        let mut req = request();
        req.document = None;
        let result = Analyzer::new().analyze(&req).unwrap();
        assert!(result.correlations.is_empty());
        assert!(result.insights.is_empty());
        assert!(result.narrative.contains("No document was supplied"));
    }

    #[test]
    fn test_fingerprint_depends_on_config() {
        let req = request();
        let default = AnalyzerConfig::default();
        let mut strict = AnalyzerConfig::default();
        strict.insight.significance = 0.9;

        let a = req.fingerprint(&default).unwrap();
        assert_eq!(a.len(), 64);
        assert_eq!(a, req.fingerprint(&default).unwrap());
        assert_ne!(a, req.fingerprint(&strict).unwrap());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let request_path = dir.path().join("request.json");
        fs::write(&request_path, serde_json::to_string(&request()).unwrap()).unwrap();
        let loaded = AnalysisRequest::load(&request_path).unwrap();
        assert_eq!(loaded, request());

        let result = Analyzer::new().analyze(&loaded).unwrap();
        let out = dir.path().join("nested").join("result.json");
        result.save(&out).unwrap();
        let saved: CorrelationAnalysisResult =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(saved.narrative, result.narrative);
        assert_eq!(saved.correlations.len(), result.correlations.len());
    }

    #[test]
    fn test_with_config_uses_config_as_given() {
        let mut config = AnalyzerConfig::default();
        config.insight.significance = 0.9;
        let analyzer = Analyzer::with_config(config.clone());
        assert_eq!(analyzer.config(), &config);
        // only the exact keyword match (1.0) clears 0.9
        assert_eq!(analyzer.analyze(&request()).unwrap().insights.len(), 1);
    }

    #[test]
    fn test_analyze_rejects_malformed_column() {
        let mut req = request();
        req.columns[0].null_count = 500;
        let err = Analyzer::new().analyze(&req).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_save_reports_write_failure() {
        let result = Analyzer::new().analyze(&request()).unwrap();
        let err = result.save("/dev/full").unwrap_err();
        assert!(matches!(err, MixsightError::Io { .. }));
    }
}
