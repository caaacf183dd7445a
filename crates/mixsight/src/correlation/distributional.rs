//! Distributional scoring of a column against the document's sentiment.
//!
//! The column's skew proxy `(mean - median) / std_dev` is read as the
//! direction the quantitative data leans. Leaning the same way as the
//! document tone is a positive association, the opposite way a negative one.
//! Magnitude is `min(1, |skew proxy|)`.

use crate::profile::{ColumnProfile, Sentiment};

/// Distributional evidence for a column, or None when there is none.
///
/// Only numeric and boolean columns carry a distribution. A zero or NaN skew
/// or a directionless sentiment yields no evidence. An infinite skew saturates.
pub fn distributional_score(column: &ColumnProfile, sentiment: &Sentiment) -> Option<f64> {
    if !column.kind.supports_distribution() {
        return None;
    }
    let direction = sentiment.direction();
    if direction == 0.0 {
        return None;
    }

    let skew = column.stats.distribution()?.skew_proxy();
    if skew == 0.0 || skew.is_nan() {
        return None;
    }

    Some(skew.signum() * direction * skew.abs().min(1.0))
}
