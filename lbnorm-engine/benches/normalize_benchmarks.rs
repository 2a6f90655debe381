//! Throughput benchmarks for Normalizer
//!
//! Run with: cargo bench --bench normalize_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lbnorm_engine::{Normalizer, PassId};
use std::hint::black_box;

/// Generate news-like text of roughly `size` bytes
fn generate_text(size: usize) -> String {
    let base = "Den 12.03.2024 um 14:30 Auer huet de Budget vun 1.500 € \
                eng Haaptroll gespillt, 3,5 % méi wéi an den 1990er. ";
    let mut text = base.repeat(size / base.len() + 1);
    let mut cut = size.min(text.len());
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    text.truncate(cut);
    text
}

/// Benchmark different text sizes
fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");
    let normalizer = Normalizer::new().unwrap();

    for size in [1024, 10_240, 102_400] {
        let text = generate_text(size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("normalize", size), &text, |b, text| {
            b.iter(|| normalizer.normalize(black_box(text)));
        });
    }

    group.finish();
}

/// Benchmark the cost of single passes by switching them off
fn bench_without_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("without_pass");
    let text = generate_text(10_240);

    for pass in [PassId::Date, PassId::Currency, PassId::Time, PassId::Unit] {
        let normalizer = Normalizer::builder().disable(pass).build().unwrap();
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("skip", pass), &text, |b, text| {
            b.iter(|| normalizer.normalize(black_box(text)));
        });
    }

    group.finish();
}

/// Benchmark the numeral grammar alone
fn bench_cardinals(c: &mut Criterion) {
    let normalizer = Normalizer::new().unwrap();
    let numerals = normalizer.numerals();
    c.bench_function("cardinal_0_to_9999", |b| {
        b.iter(|| {
            for n in 0..10_000u32 {
                let _ = black_box(numerals.to_cardinal(black_box(n)));
            }
        });
    });
}

criterion_group!(benches, bench_text_sizes, bench_without_pass, bench_cardinals);
criterion_main!(benches);
