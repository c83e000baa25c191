//! Keystroke Benchmarks
//!
//! Token processing and result formatting throughput.
//!
//! Run with: `cargo bench --bench keystrokes`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use neocalc::prelude::*;

fn bench_token_sequences(c: &mut Criterion) {
    let mut group = c.benchmark_group("token_sequences");

    let sequences = vec![
        ("sum", vec!["1", "2", "+", "3", "4", "="]),
        ("chain", vec!["5", "+", "3", "*", "2", "-", "1", "/", "3", "="]),
        ("overflow", vec!["9", "9", "9", "9", "9", "9", "9", "9", "*", "9", "="]),
        ("fault", vec!["7", "/", "0", "=", "1"]),
        ("editing", vec!["1", ".", "2", ".", "3", "Backspace", "Backspace", "4"]),
    ];

    for (name, tokens) in sequences {
        group.bench_with_input(BenchmarkId::from_parameter(name), &tokens, |bench, tokens| {
            bench.iter(|| {
                let mut calc = Calculator::new();
                for token in tokens {
                    calc.process_token(black_box(token));
                }
                black_box(calc.display().len());
            });
        });
    }

    group.finish();
}

fn bench_widget_keydown(c: &mut Criterion) {
    c.bench_function("widget_keydown_sum", |bench| {
        bench.iter(|| {
            let mut widget = WasmCalculator::new();
            for token in ["4", "2", "+", "8", "Enter"] {
                widget.key_down(black_box(token));
            }
            black_box(widget.display().len());
        });
    });
}

fn bench_format_result(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_result");
    let config = DisplayConfig::default();

    let values = vec![
        ("integer", 42.0),
        ("fraction", 1.0 / 3.0),
        ("small_band", 1.0 / 12.0),
        ("tiny", 1.234e-9),
        ("large", 123_456_789.0),
    ];

    for (name, value) in values {
        group.bench_with_input(BenchmarkId::from_parameter(name), &value, |bench, &v| {
            bench.iter(|| black_box(format_result(black_box(v), &config)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_token_sequences,
    bench_widget_keydown,
    bench_format_result
);
criterion_main!(benches);
