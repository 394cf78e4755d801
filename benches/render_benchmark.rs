//! Benchmarks for document layout and report rendering.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use resume_report::{
    classify,
    reports::{HtmlReporter, MarkdownReporter, ReportConfig, ReportGenerator},
    AnalysisReport, KeywordAnalysis, ReportDocument,
};
use std::hint::black_box;

fn sample_report(items: usize) -> AnalysisReport {
    let list = |prefix: &str| (0..items).map(|i| format!("{prefix} {i}")).collect::<Vec<_>>();
    AnalysisReport {
        match_score: 68,
        verdict: "Good Match".to_string(),
        summary: "Benchmark summary paragraph describing the candidate.".to_string(),
        matching_skills: list("Skill"),
        missing_skills: list("Missing"),
        keyword_analysis: KeywordAnalysis {
            found: list("keyword"),
            missing: list("absent"),
        },
        experience_gaps: list("Gap"),
        strengths: list("Strength"),
        recommendations: list("Recommendation"),
    }
}

fn benchmark_classify(c: &mut Criterion) {
    c.bench_function("classify", |b| {
        b.iter(|| {
            for score in -10..=110 {
                black_box(classify(black_box(score)));
            }
        });
    });
}

fn benchmark_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let config = ReportConfig::default();

    for items in [5, 50, 500] {
        let report = sample_report(items);

        group.bench_with_input(BenchmarkId::new("build", items), &report, |b, report| {
            b.iter(|| black_box(ReportDocument::build(report)));
        });

        let document = ReportDocument::build(&report);
        group.bench_with_input(BenchmarkId::new("html", items), &document, |b, document| {
            let reporter = HtmlReporter::new();
            b.iter(|| black_box(reporter.generate(document, &config)));
        });
        group.bench_with_input(BenchmarkId::new("markdown", items), &document, |b, document| {
            let reporter = MarkdownReporter::new();
            b.iter(|| black_box(reporter.generate(document, &config)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_classify, benchmark_render);
criterion_main!(benches);
