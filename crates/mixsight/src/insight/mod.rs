//! Insights derived from significant correlation records.
//!
//! This module filters ranked correlation records by significance, groups
//! them per column and signal kind, and renders each group into a
//! human-readable statement with a confidence tier.

mod generator;
mod insight;

pub use generator::{InsightConfig, InsightGenerator};
pub use insight::{Confidence, Insight};
