//! Example: Analyze a request file with mixsight.
//!
//! Usage:
//!   cargo run --example analyze -- <request.json>
//!
//! Without an argument a small built-in request is analyzed.

use std::env;

use mixsight::{
    AnalysisRequest, Analyzer, ColumnKind, ColumnProfile, DocumentProfile, NumericStatistics,
    SentimentLabel,
};

fn builtin_request() -> AnalysisRequest {
    AnalysisRequest::new("quarterly_sales")
        .with_columns(vec![
            ColumnProfile::numeric(
                "revenue",
                ColumnKind::Integer,
                100,
                0,
                NumericStatistics {
                    min: 100.0,
                    max: 20000.0,
                    mean: 5000.0,
                    median: 4800.0,
                    std_dev: 1200.0,
                    sum: 500000.0,
                },
            ),
            ColumnProfile::numeric(
                "refund_count",
                ColumnKind::Integer,
                100,
                2,
                NumericStatistics {
                    min: 0.0,
                    max: 40.0,
                    mean: 6.0,
                    median: 2.0,
                    std_dev: 5.0,
                    sum: 588.0,
                },
            ),
        ])
        .with_document(
            "q3_board_review.txt",
            DocumentProfile::new()
                .with_theme("revenue growth")
                .with_theme("refund complaints")
                .with_keyword("revenue")
                .with_keyword("refund")
                .with_sentiment(SentimentLabel::Positive, Some(0.6))
                .with_summary("Revenue grew while refunds stayed a concern."),
        )
}

fn main() -> mixsight::Result<()> {
    let request = match env::args().nth(1) {
        Some(path) => AnalysisRequest::load(path)?,
        None => builtin_request(),
    };

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Mixsight Analysis: {}", request.dataset_name);
    println!("{}", separator);
    println!();

    let result = Analyzer::new().analyze(&request)?;

    println!("## Correlations ({})", result.correlations.len());
    for record in &result.correlations {
        println!(
            "  {:20} {:10} {:25} {:+.3} ({})",
            record.column_name,
            record.signal_kind.noun(),
            record.signal_label,
            record.strength,
            record.basis.label()
        );
    }
    println!();

    println!("## Insights ({})", result.insights.len());
    for insight in &result.insights {
        println!("  [{}] {}", insight.confidence.label(), insight.statement);
    }
    println!();

    println!("## Narrative");
    println!("  {}", result.narrative);

    Ok(())
}
