//! Mixsight: mixed-methods correlation engine.
//!
//! Mixsight links the quantitative side of a dataset (pre-computed column
//! profiles) to the qualitative side of a document (themes, sentiment and
//! keywords) and explains what it finds.
//!
//! # Pipeline
//!
//! - **Correlation engine**: scores every eligible column against every signal
//! - **Insight generator**: keeps significant records and renders statements
//! - **Narrative composer**: summarizes the top insights in a few sentences
//!
//! The pipeline is pure and deterministic: no I/O, no clock, no randomness.
//!
//! # Example
//!
//! ```
//! use mixsight::{
//!     AnalysisRequest, Analyzer, ColumnKind, ColumnProfile, DocumentProfile,
//!     NumericStatistics, SentimentLabel,
//! };
//!
//! let revenue = ColumnProfile::numeric(
//!     "revenue",
//!     ColumnKind::Integer,
//!     100,
//!     0,
//!     NumericStatistics {
//!         min: 100.0,
//!         max: 20000.0,
//!         mean: 5000.0,
//!         median: 4800.0,
//!         std_dev: 1200.0,
//!         sum: 500000.0,
//!     },
//! );
//! let document = DocumentProfile::new()
//!     .with_theme("revenue growth")
//!     .with_keyword("revenue")
//!     .with_sentiment(SentimentLabel::Positive, Some(0.6));
//!
//! let request = AnalysisRequest::new("sales")
//!     .with_columns(vec![revenue])
//!     .with_document("q3 review", document);
//!
//! let result = Analyzer::new().analyze(&request).unwrap();
//! assert!(!result.correlations.is_empty());
//! println!("{}", result.narrative);
//! ```

pub mod config;
pub mod correlation;
pub mod error;
pub mod insight;
pub mod narrative;
pub mod profile;

mod analyzer;

pub use crate::analyzer::{AnalysisRequest, Analyzer, CorrelationAnalysisResult, DocumentInput};
pub use config::AnalyzerConfig;
pub use correlation::{
    CorrelationConfig, CorrelationEngine, CorrelationRecord, EvidenceBasis, SignalKind,
};
pub use error::{MixsightError, Result};
pub use insight::{Confidence, Insight, InsightConfig, InsightGenerator};
pub use narrative::{NarrativeComposer, NarrativeConfig};
pub use profile::{
    BooleanStatistics, ColumnKind, ColumnProfile, ColumnStats, DateStatistics, DocumentProfile,
    NumericStatistics, Sentiment, SentimentLabel, StringStatistics, Theme, TopValue,
};
