//! Input profiles: pre-computed column statistics and document signals.

mod column;
mod document;
mod types;

pub use column::{
    BooleanStatistics, ColumnProfile, ColumnStats, DateStatistics, NumericStatistics,
    StringStatistics, TopValue, validate_columns,
};
pub use document::{DocumentProfile, Sentiment, SentimentLabel, Theme};
pub use types::ColumnKind;
