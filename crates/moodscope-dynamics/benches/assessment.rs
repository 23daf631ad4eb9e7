//! Benchmarks for the personality assessment pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use moodscope_core::DailyEntry;
use moodscope_dynamics::{assess, stats, ActivityPatterns};

const TAGS: [&str; 8] = ["仕事", "運動", "学習", "少し", "はい", "3", "4", "普通"];

fn create_history(days: usize) -> Vec<DailyEntry> {
    (0..days)
        .map(|i| {
            let t = i as f64 * 0.3;
            let tags = TAGS
                .iter()
                .skip(i % 3)
                .step_by(2)
                .map(|t| t.to_string())
                .collect();

            DailyEntry::new(
                format!("{}-{:02}-{:02}", 2024 + i / 336, (i / 28) % 12 + 1, i % 28 + 1),
                t.sin() * 0.8,
                t.cos() * 0.6,
                tags,
            )
        })
        .collect()
}

fn benchmark_assess(c: &mut Criterion) {
    let year = create_history(365);
    let month = create_history(30);

    c.bench_function("assess_365_days", |b| b.iter(|| assess(black_box(&year))));

    c.bench_function("assess_30_days", |b| b.iter(|| assess(black_box(&month))));
}

fn benchmark_primitives(c: &mut Criterion) {
    let year = create_history(365);
    let valences: Vec<f64> = year.iter().map(|e| e.valence).collect();

    c.bench_function("autocorrelation_365", |b| {
        b.iter(|| stats::autocorrelation(black_box(&valences)))
    });

    c.bench_function("activity_patterns_365", |b| {
        b.iter(|| ActivityPatterns::from_entries(black_box(&year)))
    });
}

criterion_group!(benches, benchmark_assess, benchmark_primitives);
criterion_main!(benches);
