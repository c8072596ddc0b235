// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for source-space crop derivation.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size, Vec2};
use vantage_geom::crop_rect;

fn bench_crop_rect(c: &mut Criterion) {
    let source = Size::new(4000.0, 3000.0);
    let container = Size::new(1080.0, 1920.0);
    let selection = Rect::new(120.0, 200.0, 960.0, 1700.0);

    let mut group = c.benchmark_group("geom/crop_rect");

    group.bench_function("identity_view", |b| {
        b.iter(|| {
            black_box(crop_rect(
                black_box(source),
                black_box(container),
                Vec2::ZERO,
                1.0,
                container.to_rect(),
            ))
        })
    });

    for zoom in [1.0_f64, 2.5, 8.0] {
        group.bench_with_input(BenchmarkId::new("zoomed_selection", zoom), &zoom, |b, &zoom| {
            let offset = Vec2::new(container.width * (zoom - 1.0) / 2.0, 0.0);
            b.iter(|| {
                black_box(crop_rect(
                    black_box(source),
                    black_box(container),
                    black_box(offset),
                    black_box(zoom),
                    black_box(selection),
                ))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_crop_rect);
criterion_main!(benches);
