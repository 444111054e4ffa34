use chart_transform::api::{ChartEngine, ChartEngineConfig, TickRequest, compute_ticks};
use chart_transform::core::{
    ChartOrientation, ContentRect, CoordinateTransformer, DataPoint, ValueBounds, ViewportModel,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn zoomed_setup() -> (CoordinateTransformer, ViewportModel) {
    let rect = ContentRect::new(40.0, 20.0, 1880.0, 1040.0);
    let mut viewport = ViewportModel::new(rect);
    let candidate = viewport.zoom_by(3.0, 1.5, 900.0, 500.0);
    viewport.commit(candidate);

    let mut transformer = CoordinateTransformer::new(ChartOrientation::Vertical);
    transformer.rebuild_value_scale(ValueBounds::new(0.0, 10_000.0, -250.0, 2_500.0), rect, false);
    (transformer, viewport)
}

fn bench_value_pixel_round_trip(c: &mut Criterion) {
    let (transformer, viewport) = zoomed_setup();

    c.bench_function("value_pixel_round_trip", |b| {
        b.iter(|| {
            let px = transformer.value_to_pixel(black_box(4_321.123), black_box(812.5), &viewport);
            let _ = transformer.pixel_to_value(px.x, px.y, &viewport);
        })
    });
}

fn bench_point_projection_10k(c: &mut Criterion) {
    let (transformer, viewport) = zoomed_setup();
    let points: Vec<DataPoint> = (0..10_000)
        .map(|i| {
            let x = i as f64;
            let y = 1_000.0 + (x * 0.01).sin() * 750.0;
            DataPoint::new(x, y)
        })
        .collect();

    c.bench_function("point_projection_10k", |b| {
        b.iter(|| {
            let _ = transformer.project_points(black_box(&points), black_box(&viewport));
        })
    });
}

fn bench_nice_ticks(c: &mut Criterion) {
    c.bench_function("nice_ticks", |b| {
        b.iter(|| {
            let _ = compute_ticks(black_box(
                TickRequest::new(-1_234.5, 98_765.4, 8).with_centering(true),
            ));
        })
    });
}

fn bench_engine_visible_projection_2k(c: &mut Criterion) {
    let config = ChartEngineConfig::new(1600.0, 900.0);
    let mut engine = ChartEngine::new(config).expect("engine init");
    let points: Vec<DataPoint> = (0..2_000)
        .map(|i| {
            let x = i as f64;
            DataPoint::new(x, 400.0 + x * 0.03)
        })
        .collect();
    engine.set_data(points);
    let _ = engine.zoom_by(4.0, 1.0, 800.0, 450.0);

    c.bench_function("engine_visible_projection_2k", |b| {
        b.iter(|| {
            let _ = engine.project_visible_points(black_box(1.0), black_box(1.0));
        })
    });
}

criterion_group!(
    benches,
    bench_value_pixel_round_trip,
    bench_point_projection_10k,
    bench_nice_ticks,
    bench_engine_visible_projection_2k
);
criterion_main!(benches);
