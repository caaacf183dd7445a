//! Analyzer configuration and TOML loading.
//!
//! Every weighting constant and threshold is tunable policy. A config file
//! only needs the keys it overrides:
//!
//! ```toml
//! [correlation]
//! min_samples = 5
//!
//! [insight]
//! significance = 0.4
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::correlation::CorrelationConfig;
use crate::error::{MixsightError, Result};
use crate::insight::InsightConfig;
use crate::narrative::NarrativeConfig;

/// Configuration for a full analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Correlation scoring policy.
    pub correlation: CorrelationConfig,
    /// Insight thresholds.
    pub insight: InsightConfig,
    /// Narrative composition.
    pub narrative: NarrativeConfig,
}

impl AnalyzerConfig {
    /// Parse and validate a TOML configuration.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AnalyzerConfig = toml::from_str(content)
            .map_err(|e| MixsightError::Config(format!("Invalid config TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| MixsightError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Check every section.
    pub fn validate(&self) -> Result<()> {
        self.correlation.validate()?;
        self.insight.validate()?;
        self.narrative.validate()
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| MixsightError::Config(format!("Failed to render config: {}", e)))
    }
}
