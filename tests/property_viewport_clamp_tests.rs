use chart_transform::core::{AffineTransform, ContentRect, ViewportLimits, ViewportModel};
use proptest::prelude::*;

fn limited_viewport(max_scale: f64, drag_x: f64, drag_y: f64) -> ViewportModel {
    ViewportModel::new(ContentRect::new(20.0, 10.0, 820.0, 610.0)).with_limits(ViewportLimits {
        max_scale_x: max_scale,
        max_scale_y: max_scale,
        drag_offset_x: drag_x,
        drag_offset_y: drag_y,
        ..ViewportLimits::default()
    })
}

proptest! {
    #[test]
    fn commit_is_idempotent(
        scale_x in -10.0f64..100.0,
        scale_y in -10.0f64..100.0,
        translate_x in -100_000.0f64..100_000.0,
        translate_y in -100_000.0f64..100_000.0,
        max_scale in 1.0f64..60.0,
        drag_x in 0.0f64..200.0,
        drag_y in 0.0f64..200.0
    ) {
        let mut viewport = limited_viewport(max_scale, drag_x, drag_y);
        let candidate = AffineTransform::from_coefficients([
            scale_x,
            0.0,
            translate_x,
            0.0,
            scale_y,
            translate_y,
        ]);

        let first = viewport.commit(candidate);
        let second = viewport.commit(first);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn committed_transform_respects_limits(
        zoom_x in 0.01f64..100.0,
        zoom_y in 0.01f64..100.0,
        pivot_x in -500.0f64..1500.0,
        pivot_y in -1000.0f64..500.0,
        pan_x in -10_000.0f64..10_000.0,
        pan_y in -10_000.0f64..10_000.0,
        max_scale in 1.0f64..60.0,
        drag_x in 0.0f64..200.0,
        drag_y in 0.0f64..200.0
    ) {
        let mut viewport = limited_viewport(max_scale, drag_x, drag_y);
        viewport.commit(viewport.zoom_by(zoom_x, zoom_y, pivot_x, pivot_y));
        let committed = viewport.commit(viewport.pan_by(pan_x, pan_y));

        prop_assert!(committed.scale_x() >= 1.0 && committed.scale_x() <= max_scale);
        prop_assert!(committed.scale_y() >= 1.0 && committed.scale_y() <= max_scale);

        let width = viewport.content_rect().width();
        let height = viewport.content_rect().height();
        let max_trans_x = -width * (committed.scale_x() - 1.0);
        let max_trans_y = height * (committed.scale_y() - 1.0);
        prop_assert!(committed.translate_x() <= drag_x);
        prop_assert!(committed.translate_x() >= max_trans_x - drag_x);
        prop_assert!(committed.translate_y() >= -drag_y);
        prop_assert!(committed.translate_y() <= max_trans_y + drag_y);
    }
}
