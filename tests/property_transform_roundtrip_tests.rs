use chart_transform::core::{
    ChartOrientation, ContentRect, CoordinateTransformer, Point, ValueBounds, ViewportModel,
};
use proptest::prelude::*;

fn orientation_strategy() -> impl Strategy<Value = ChartOrientation> {
    prop_oneof![
        Just(ChartOrientation::Vertical),
        Just(ChartOrientation::Horizontal)
    ]
}

proptest! {
    #[test]
    fn value_pixel_round_trip_property(
        x_min in -1_000_000.0f64..1_000_000.0,
        x_span in 0.001f64..1_000_000.0,
        y_min in -1_000_000.0f64..1_000_000.0,
        y_span in 0.001f64..1_000_000.0,
        x_factor in 0.0f64..1.0,
        y_factor in 0.0f64..1.0,
        zoom_x in 1.0f64..50.0,
        zoom_y in 1.0f64..50.0,
        invert in any::<bool>(),
        orientation in orientation_strategy()
    ) {
        let rect = ContentRect::new(32.0, 16.0, 2048.0, 1024.0);
        let mut viewport = ViewportModel::new(rect);
        let center = viewport.content_center();
        viewport.commit(viewport.zoom_by(zoom_x, zoom_y, center.x, center.y));

        let mut transformer = CoordinateTransformer::new(orientation);
        transformer.rebuild_value_scale(
            ValueBounds::new(x_min, x_min + x_span, y_min, y_min + y_span),
            rect,
            invert,
        );

        let value = Point::new(x_min + x_factor * x_span, y_min + y_factor * y_span);
        let pixel = transformer.value_to_pixel(value.x, value.y, &viewport);
        let recovered = transformer.pixel_to_value(pixel.x, pixel.y, &viewport);

        let tolerance_x = 1e-7 * (1.0 + value.x.abs());
        let tolerance_y = 1e-7 * (1.0 + value.y.abs());
        prop_assert!((recovered.x - value.x).abs() <= tolerance_x);
        prop_assert!((recovered.y - value.y).abs() <= tolerance_y);
    }

    #[test]
    fn visible_bounds_stay_within_data_when_clamped(
        zoom_x in 1.0f64..20.0,
        pan_x in -50_000.0f64..50_000.0
    ) {
        let rect = ContentRect::from_size(1000.0, 500.0);
        let mut viewport = ViewportModel::new(rect);
        viewport.commit(viewport.zoom_by(zoom_x, 1.0, 0.0, 0.0));
        viewport.commit(viewport.pan_by(pan_x, 0.0));

        let mut transformer = CoordinateTransformer::default();
        transformer.rebuild_value_scale(ValueBounds::new(0.0, 100.0, 0.0, 1.0), rect, false);

        let (low, high) = transformer.compute_visible_value_bounds(rect, &viewport);
        prop_assert!(low >= -1e-9);
        prop_assert!(high <= 100.0 + 1e-9);
        prop_assert!(((high - low) - 100.0 / zoom_x).abs() <= 1e-6);
    }
}
