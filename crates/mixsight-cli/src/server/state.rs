//! Application state for the web server.

use std::sync::Arc;

use mixsight::{Analyzer, AnalyzerConfig};

/// Shared application state.
///
/// The analyzer is stateless between calls, so handlers share it without a lock.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
}

impl AppState {
    /// Create new application state. The configuration is used as given.
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            analyzer: Arc::new(Analyzer::with_config(config)),
        }
    }
}
