//! Serve command - expose the pipeline over HTTP.

use std::path::PathBuf;

use mixsight::AnalyzerConfig;

use crate::server::{self, AppState};

pub fn run(port: u16, config: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = AnalyzerConfig::load_or_default(config.as_deref())?;
    tracing::debug!(
        min_samples = config.correlation.min_samples,
        significance = config.insight.significance,
        "loaded configuration"
    );

    let state = AppState::new(config);

    // Create tokio runtime and run server
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        tokio::select! {
            result = server::run_server(state, port) => result,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down");
                Ok(())
            }
        }
    })
}
