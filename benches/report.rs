use criterion::{Criterion, criterion_group, criterion_main};
use file_analyser_core::{Analyzer, InMemorySource, ReportOptions};
use std::hint::black_box;

fn sample_lines(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("line {i} has a level racecar and\tsome filler words for file analysis"))
        .collect()
}

fn benchmark_report(c: &mut Criterion) {
    let source = InMemorySource::from_lines(sample_lines(10_000));
    let options = ReportOptions::default();

    c.bench_function("report_10k_lines", |b| {
        b.iter(|| {
            let report = Analyzer::report(black_box(&source), &options).unwrap();
            black_box(report);
        })
    });
}

criterion_group!(benches, benchmark_report);
criterion_main!(benches);
