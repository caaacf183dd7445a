//! Config command - print the effective policy configuration.

use std::path::PathBuf;

use mixsight::AnalyzerConfig;

pub fn run(config: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = AnalyzerConfig::load_or_default(config.as_deref())?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}
