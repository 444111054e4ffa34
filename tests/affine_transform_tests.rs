use approx::assert_abs_diff_eq;
use chart_transform::core::{AffineTransform, ContentRect, Point};

#[test]
fn concat_applies_right_hand_side_first() {
    let scale = AffineTransform::scaling(2.0, 3.0);
    let shift = AffineTransform::translation(5.0, -1.0);

    let shift_then_scale = scale.concat(shift);
    assert_eq!(
        shift_then_scale.map_point(Point::new(1.0, 1.0)),
        Point::new(12.0, 0.0)
    );

    let scale_then_shift = scale.then(shift);
    assert_eq!(
        scale_then_shift.map_point(Point::new(1.0, 1.0)),
        Point::new(7.0, 2.0)
    );
}

#[test]
fn identity_is_neutral_for_composition() {
    let transform = AffineTransform::from_coefficients([1.5, 0.25, -3.0, 0.5, 2.0, 7.0]);
    assert_eq!(transform.concat(AffineTransform::IDENTITY), transform);
    assert_eq!(AffineTransform::IDENTITY.concat(transform), transform);
    assert!(AffineTransform::default().is_identity());
}

#[test]
fn coefficients_round_trip_through_array() {
    let coefficients = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let transform = AffineTransform::from_coefficients(coefficients);
    assert_eq!(transform.coefficients(), coefficients);
    assert_eq!(transform.determinant(), 1.0 * 5.0 - 2.0 * 4.0);
}

#[test]
fn inverse_composes_to_identity() {
    let transform = AffineTransform::translation(-10.0, 4.0)
        .post_scale(3.0, -0.5)
        .post_translate(25.0, 100.0);
    let inverse = transform.invert().expect("invertible");
    let product = transform.concat(inverse);

    for (actual, expected) in product
        .coefficients()
        .into_iter()
        .zip(AffineTransform::IDENTITY.coefficients())
    {
        assert_abs_diff_eq!(actual, expected, epsilon = 1e-12);
    }
}

#[test]
fn non_finite_transform_is_not_invertible() {
    let transform = AffineTransform::translation(f64::INFINITY, 0.0);
    assert!(!transform.is_finite());
    assert!(transform.invert().is_none());
}

#[test]
fn map_points_rewrites_buffer_in_order() {
    let transform = AffineTransform::scaling(10.0, 1.0).post_translate(1.0, 2.0);
    let mut points = [Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(-1.0, 3.0)];
    transform.map_points(&mut points);

    assert_eq!(
        points,
        [Point::new(1.0, 2.0), Point::new(11.0, 3.0), Point::new(-9.0, 5.0)]
    );
}

#[test]
fn map_rect_returns_bounding_box_of_rotated_corners() {
    let swap = AffineTransform::from_coefficients([0.0, 1.0, 0.0, 1.0, 0.0, 0.0]);
    let mapped = swap.map_rect(ContentRect::new(0.0, 0.0, 40.0, 10.0));
    assert_eq!(mapped, ContentRect::new(0.0, 0.0, 10.0, 40.0));
}

#[test]
fn pre_translate_shifts_input_space() {
    let transform = AffineTransform::scaling(2.0, 2.0).pre_translate(3.0, 0.0);
    assert_eq!(
        transform.map_point(Point::new(0.0, 1.0)),
        Point::new(6.0, 2.0)
    );
}

#[test]
fn kurbo_affine_converts_both_ways() {
    let anchor = kurbo::Vec2::new(40.0, 80.0);
    let affine = kurbo::Affine::translate(anchor)
        * kurbo::Affine::scale_non_uniform(3.0, 0.5)
        * kurbo::Affine::translate(-anchor);
    let transform = AffineTransform::from(affine);

    assert_eq!(transform, AffineTransform::scaling_around(3.0, 0.5, 40.0, 80.0));
    assert_eq!(kurbo::Affine::from(transform), affine);
}

#[test]
fn transform_serializes_as_kurbo_coefficients() {
    let transform = AffineTransform::translation(2.0, 3.0);
    let json = serde_json::to_value(transform).expect("serialize");
    assert_eq!(json, serde_json::json!([1.0, 0.0, 0.0, 1.0, 2.0, 3.0]));

    let parsed: AffineTransform = serde_json::from_value(json).expect("deserialize");
    assert_eq!(parsed, transform);
}
