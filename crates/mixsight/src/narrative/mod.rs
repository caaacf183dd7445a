//! Narrative composition from ranked insights.

mod composer;

pub use composer::{NarrativeComposer, NarrativeConfig};
