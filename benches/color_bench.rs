//! Benchmarks for colorway parsing, conversion and formatting.

use colorway::prelude::*;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn benchmark_parse(c: &mut Criterion) {
    c.bench_function("parse_hex_cached", |b| {
        b.iter(|| black_box(Color::parse(black_box("#4095BF"))));
    });

    c.bench_function("parse_hsla_cached", |b| {
        b.iter(|| black_box(Color::parse(black_box("hsla(200, 50%, 50%, 0.8)"))));
    });

    c.bench_function("parse_lab_uncached", |b| {
        let inputs: Vec<String> = (0..2048)
            .map(|i| format!("lab({}, {}, -{})", i % 100, i % 80, i % 90))
            .collect();
        let mut index = 0;
        b.iter(|| {
            index = (index + 1) % inputs.len();
            black_box(Color::parse(&inputs[index]))
        });
    });
}

fn benchmark_conversions(c: &mut Criterion) {
    let color = Color::from_rgb(64, 149, 191);

    c.bench_function("to_hsl", |b| b.iter(|| black_box(black_box(color).to_hsl())));
    c.bench_function("to_cmyk", |b| b.iter(|| black_box(black_box(color).to_cmyk())));
    c.bench_function("to_lab", |b| b.iter(|| black_box(black_box(color).to_lab())));
    c.bench_function("of_lab", |b| {
        b.iter(|| black_box(Color::of_lab(black_box(58.36), -12.32, -29.31)));
    });
}

fn benchmark_formatting(c: &mut Criterion) {
    let color = Color::of_rgba(64, 149, 191, 0.8).unwrap_or_default();

    c.bench_function("format_hsla_decimal", |b| {
        b.iter(|| black_box(color.to_string_as(ColorModel::Hsla, true)));
    });

    c.bench_function("format_model_map", |b| {
        b.iter(|| black_box(color.to_model_map()));
    });
}

fn benchmark_gradient(c: &mut Criterion) {
    c.bench_function("gradient_256", |b| {
        b.iter(|| black_box(generate_gradient(Color::BLACK, Color::ORANGE, 256)));
    });

    c.bench_function("sort_by_luminosity_256", |b| {
        let colors = generate_gradient(Color::WHITE, Color::BLUE, 256);
        b.iter(|| {
            let mut sorted = colors.clone();
            sort_by_luminosity(&mut sorted);
            black_box(sorted)
        });
    });
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_conversions,
    benchmark_formatting,
    benchmark_gradient,
);
criterion_main!(benches);
