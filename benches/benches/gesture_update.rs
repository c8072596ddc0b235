// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for per-frame gesture processing.
//!
//! `TransformState::update` and `ZoomState::on_gesture` sit on the pointer-move
//! hot path, so a frame must stay cheap even with velocity tracking enabled.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use vantage_transform::{TransformConfig, TransformState};
use vantage_zoom::{PointerSample, ZoomConfig, ZoomState};

const CONTAINER: Size = Size::new(1080.0, 1920.0);
const IMAGE: Size = Size::new(4000.0, 3000.0);
const CENTROID: Point = Point::new(540.0, 960.0);

fn transform_state(limit_pan: bool) -> TransformState {
    let config = TransformConfig {
        max_zoom: 8.0,
        rotation_enabled: true,
        limit_pan,
        ..TransformConfig::default()
    };
    TransformState::new(CONTAINER, config).expect("default-shaped config is valid")
}

fn zoom_state() -> ZoomState {
    ZoomState::new(CONTAINER, IMAGE, ZoomConfig::default())
        .expect("default configuration is valid")
}

fn pointer(id: u64, position: Point, timestamp_ms: u64) -> PointerSample {
    PointerSample {
        id,
        position,
        timestamp_ms,
        pressed: true,
    }
}

fn bench_transform_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform/update");

    group.bench_function("pan_frame", |b| {
        b.iter_batched(
            || transform_state(false),
            |mut state| {
                state.update(CENTROID, 1.0, Vec2::new(3.0, -2.0), 0.0);
                black_box(state);
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("pinch_frame", |b| {
        b.iter_batched(
            || transform_state(false),
            |mut state| {
                state.update(Point::new(300.0, 1200.0), 1.02, Vec2::new(0.5, 0.5), 0.3);
                black_box(state);
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("pinch_frame_limited", |b| {
        b.iter_batched(
            || transform_state(true),
            |mut state| {
                state.update(Point::new(300.0, 1200.0), 1.02, Vec2::new(0.5, 0.5), 0.3);
                black_box(state);
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_zoom_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom/gesture");

    // A full drag frame stores a velocity sample on top of the transform work.
    group.bench_function("drag_frame", |b| {
        b.iter_batched(
            zoom_state,
            |mut state| {
                let main = pointer(1, Point::new(520.0, 940.0), 16);
                state.on_gesture(CENTROID, Vec2::new(4.0, -3.0), 1.0, 0.0, main, &[main]);
                black_box(state);
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("pinch_frame", |b| {
        b.iter_batched(
            zoom_state,
            |mut state| {
                let main = pointer(1, Point::new(400.0, 900.0), 16);
                let other = pointer(2, Point::new(680.0, 1020.0), 16);
                state.on_gesture(CENTROID, Vec2::ZERO, 1.015, 0.0, main, &[main, other]);
                black_box(state);
            },
            BatchSize::SmallInput,
        )
    });

    // Velocity regression over a full sample window plus the fling decision.
    group.bench_function("release_after_drag", |b| {
        b.iter_batched(
            || {
                let mut state = zoom_state();
                let main = pointer(1, Point::new(400.0, 900.0), 0);
                let other = pointer(2, Point::new(680.0, 1020.0), 0);
                state.on_gesture(CENTROID, Vec2::ZERO, 3.0, 0.0, main, &[main, other]);
                for frame in 0..20u64 {
                    let at = Point::new(520.0 + 8.0 * frame as f64, 940.0);
                    let main = pointer(1, at, frame * 8);
                    state.on_gesture(at, Vec2::new(8.0, 0.0), 1.0, 0.0, main, &[main]);
                }
                state
            },
            |mut state| {
                black_box(state.on_gesture_end());
                black_box(state);
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("tick_while_settling", |b| {
        b.iter_batched(
            || {
                let config = ZoomConfig {
                    fling_enabled: false,
                    ..ZoomConfig::default()
                };
                let mut state = ZoomState::new(CONTAINER, IMAGE, config)
                    .expect("default configuration is valid");
                let main = pointer(1, Point::new(400.0, 900.0), 0);
                let other = pointer(2, Point::new(680.0, 1020.0), 0);
                let pointers = [main, other];
                state.on_gesture(CENTROID, Vec2::new(900.0, 0.0), 3.0, 0.0, main, &pointers);
                state.on_gesture_end();
                state
            },
            |mut state| {
                black_box(state.tick(16.0));
                black_box(state);
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("data_snapshot", |b| {
        let mut state = zoom_state();
        let main = pointer(1, Point::new(400.0, 900.0), 0);
        let other = pointer(2, Point::new(680.0, 1020.0), 0);
        state.on_gesture(CENTROID, Vec2::new(150.0, -90.0), 2.5, 0.0, main, &[main, other]);
        b.iter(|| black_box(state.data()))
    });

    group.finish();
}

criterion_group!(benches, bench_transform_update, bench_zoom_gesture);
criterion_main!(benches);
