//! Analyze command - run the pipeline over a request file.

use std::path::{Path, PathBuf};

use colored::Colorize;
use mixsight::{AnalysisRequest, Analyzer, AnalyzerConfig, Confidence};

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Validate input file exists
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let config = AnalyzerConfig::load_or_default(config.as_deref())?;
    let request = AnalysisRequest::load(&file)?;
    let fingerprint = request.fingerprint(&config)?;
    tracing::debug!(
        dataset = %request.dataset_name,
        columns = request.columns.len(),
        has_document = request.document.is_some(),
        %fingerprint,
        "loaded analysis request"
    );

    let analyzer = Analyzer::with_config(config);
    let result = analyzer.analyze(&request)?;
    tracing::info!(
        dataset = %request.dataset_name,
        correlations = result.correlations.len(),
        insights = result.insights.len(),
        "analysis complete"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Analyzing".cyan().bold(),
        request.dataset_name.white()
    );

    if verbose {
        println!();
        println!("{}", "Correlations:".yellow().bold());
        for record in &result.correlations {
            println!(
                "  {:20} {:10} {:25} {:+.3} {}",
                record.column_name,
                record.signal_kind.noun(),
                record.signal_label,
                record.strength,
                record.basis.label()
            );
        }
        println!();
    }

    let count = |tier: Confidence| result.insights.iter().filter(|i| i.confidence == tier).count();
    println!(
        "Found {} correlations and {} insights ({} high, {} medium, {} low)",
        result.correlations.len().to_string().white().bold(),
        result.insights.len().to_string().white().bold(),
        count(Confidence::High).to_string().green(),
        count(Confidence::Medium).to_string().yellow(),
        count(Confidence::Low).to_string().blue()
    );

    let output_path = output.unwrap_or_else(|| default_output_path(&file));
    result.save(&output_path)?;

    println!();
    println!(
        "{} {}",
        "Saved to".green().bold(),
        output_path.display().to_string().white()
    );
    println!();
    println!("{}", result.narrative);

    Ok(())
}

/// `<dir>/<stem>.analysis.json` next to the request file.
fn default_output_path(file: &Path) -> PathBuf {
    let stem = file.file_stem().unwrap_or_default().to_string_lossy();
    file.with_file_name(format!("{}.analysis.json", stem))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const REQUEST: &str = r#"{
        "dataset_name": "sales",
        "columns": [{
            "name": "revenue",
            "kind": "integer",
            "count": 100,
            "null_count": 0,
            "stats": {"type": "numeric", "min": 100, "max": 20000, "mean": 5000,
                      "median": 4800, "std_dev": 1200, "sum": 500000}
        }],
        "document": {
            "name": "review",
            "profile": {"themes": ["revenue growth"], "keywords": ["revenue"],
                        "sentiment": {"label": "positive", "polarity": 0.6}}
        }
    }"#;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("/data/sales.json")),
            PathBuf::from("/data/sales.analysis.json")
        );
    }

    #[test]
    fn test_run_writes_result() {
        let dir = TempDir::new().unwrap();
        let request = dir.path().join("sales.json");
        fs::write(&request, REQUEST).unwrap();

        run(request, None, None, false, false).unwrap();

        let saved = fs::read_to_string(dir.path().join("sales.analysis.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&saved).unwrap();
        assert_eq!(value["correlations"].as_array().unwrap().len(), 3);
        assert!(value["narrative"].as_str().unwrap().contains("sales"));
    }

    #[test]
    fn test_run_missing_file() {
        let err = run(PathBuf::from("/nonexistent/req.json"), None, None, false, false).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn test_run_invalid_request() {
        let dir = TempDir::new().unwrap();
        let request = dir.path().join("bad.json");
        fs::write(&request, REQUEST.replace("\"null_count\": 0", "\"null_count\": 500")).unwrap();
        let err = run(request, None, None, false, false).unwrap_err();
        assert!(err.to_string().contains("Invalid input"));
    }
}
