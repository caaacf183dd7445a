//! Correlation engine: pairs dataset columns with document signals.
//!
//! Two kinds of evidence are scored:
//!
//! - **Lexical**: token overlap between a column name and a signal label
//! - **Distributional**: skew of a numeric/boolean column against the
//!   document's sentiment direction
//!
//! Both are heuristics, not statistical tests.

mod distributional;
mod engine;
mod lexical;
mod record;

pub use distributional::distributional_score;
pub use engine::{CorrelationConfig, CorrelationEngine};
pub use lexical::{lexical_score, tokenize};
pub use record::{compare_records, CorrelationRecord, EvidenceBasis, SignalKind, SENTIMENT_LABEL};
