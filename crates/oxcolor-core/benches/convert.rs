//! Conversion pipeline benchmarks
//!
//! Measures the scalar kernels and the full multi-hop pipelines the
//! gradient renderer drives per vertex.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use oxcolor_core::{CssRgb, Hsl, Lab, Oklab, Rgb, RgbSpace};

/// Generate test data for benchmarks
fn generate_rgb_data(count: usize) -> Vec<Rgb> {
    (0..count)
        .map(|i| {
            let t = i as f64 / count as f64;
            Rgb::new(t, (t * 2.0) % 1.0, (t * 3.0) % 1.0)
        })
        .collect()
}

fn bench_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfer");

    for space in RgbSpace::ALL {
        group.bench_function(format!("{space:?}_decode"), |b| {
            b.iter(|| space.decode_channel(black_box(0.5)))
        });
    }

    group.finish();
}

fn bench_pipelines(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let input = generate_rgb_data(10_000);
    group.throughput(Throughput::Elements(input.len() as u64));

    group.bench_function("srgb_to_oklch", |b| {
        b.iter(|| {
            for &rgb in &input {
                let xyz = RgbSpace::Srgb.to_xyz(RgbSpace::Srgb.decode(black_box(rgb)));
                black_box(Oklab::from_xyz(xyz).to_oklch());
            }
        })
    });

    group.bench_function("prophoto_to_lch", |b| {
        b.iter(|| {
            for &rgb in &input {
                let xyz = RgbSpace::ProPhoto.to_xyz(RgbSpace::ProPhoto.decode(black_box(rgb)));
                black_box(Lab::from_xyz(xyz).to_lch());
            }
        })
    });

    group.bench_function("rgb_to_hsl", |b| {
        b.iter(|| {
            for &rgb in &input {
                black_box(Hsl::from_rgb(black_box(rgb)));
            }
        })
    });

    group.finish();
}

fn bench_hex(c: &mut Criterion) {
    let mut group = c.benchmark_group("hex");

    group.bench_function("from_hex", |b| {
        b.iter(|| CssRgb::from_hex(black_box("#1280fe")).unwrap())
    });

    group.bench_function("to_hex", |b| {
        let css = CssRgb::new(0x12, 0x80, 0xfe);
        b.iter(|| black_box(css).to_hex())
    });

    group.finish();
}

criterion_group!(benches, bench_transfer, bench_pipelines, bench_hex);
criterion_main!(benches);
