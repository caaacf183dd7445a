//! Full analysis pipeline performance benchmarks.
//!
//! Measures correlation, insight and narrative stages end to end as the
//! number of columns and signals grows.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mixsight::{
    AnalysisRequest, Analyzer, BooleanStatistics, ColumnKind, ColumnProfile, ColumnStats,
    CorrelationEngine, DocumentProfile, NumericStatistics, SentimentLabel,
};

const STEMS: &[&str] = &[
    "revenue", "churn", "satisfaction", "support", "price", "discount", "tenure", "usage",
];
const SUFFIXES: &[&str] = &["rate", "total", "growth", "score", "count"];

/// Generate a realistic mix of numeric and boolean column profiles.
fn generate_columns(count: usize) -> Vec<ColumnProfile> {
    (0..count)
        .map(|i| {
            let name = format!(
                "{}_{}_{}",
                STEMS[i % STEMS.len()],
                SUFFIXES[i % SUFFIXES.len()],
                i
            );
            if i % 4 == 0 {
                ColumnProfile::new(
                    name,
                    ColumnKind::Boolean,
                    1000,
                    i % 50,
                    ColumnStats::Boolean(BooleanStatistics {
                        true_count: 300 + i % 200,
                        false_count: 400,
                    }),
                )
            } else {
                let median = 100.0 + (i % 17) as f64;
                ColumnProfile::numeric(
                    name,
                    ColumnKind::Float,
                    1000,
                    i % 30,
                    NumericStatistics {
                        min: 0.0,
                        max: 1000.0,
                        mean: median + (i % 7) as f64 * 3.0,
                        median,
                        std_dev: 25.0,
                        sum: median * 1000.0,
                    },
                )
            }
        })
        .collect()
}

/// Generate a document with the given number of themes and keywords.
fn generate_document(signals: usize) -> DocumentProfile {
    let mut doc = DocumentProfile::new().with_sentiment(SentimentLabel::Positive, Some(0.4));
    for i in 0..signals {
        doc = doc
            .with_theme(format!("{} {} trends {}", STEMS[i % STEMS.len()], SUFFIXES[i % SUFFIXES.len()], i))
            .with_keyword(format!("{}{}", STEMS[(i + 3) % STEMS.len()], i));
    }
    doc
}

fn bench_correlation(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlation_compute");
    let engine = CorrelationEngine::new();
    let document = generate_document(20);

    for columns in [10, 100, 1000] {
        let profiles = generate_columns(columns);
        group.throughput(Throughput::Elements(columns as u64));
        group.bench_with_input(BenchmarkId::from_parameter(columns), &profiles, |b, cols| {
            b.iter(|| engine.compute(black_box(cols), Some(black_box(&document))))
        });
    }
    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let analyzer = Analyzer::new();

    for signals in [5, 25, 100] {
        let request = AnalysisRequest::new("bench")
            .with_columns(generate_columns(200))
            .with_document("bench document", generate_document(signals));
        group.bench_with_input(BenchmarkId::from_parameter(signals), &request, |b, req| {
            b.iter(|| analyzer.analyze(black_box(req)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_correlation, bench_full_pipeline);
criterion_main!(benches);
