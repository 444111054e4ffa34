use kurbo::{Affine, Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::core::types::{ContentRect, Point};

/// 2D affine transform backed by [`kurbo::Affine`].
///
/// Coefficients are exposed in row order:
///
/// ```text
/// | scale_x  skew_x  translate_x |
/// | skew_y   scale_y translate_y |
/// |   0        0         1       |
/// ```
///
/// `post_*` operations apply after the existing transform, `pre_*` before it.
/// All operations return a new value; nothing is mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AffineTransform(Affine);

impl From<Affine> for AffineTransform {
    fn from(affine: Affine) -> Self {
        Self(affine)
    }
}

impl From<AffineTransform> for Affine {
    fn from(transform: AffineTransform) -> Self {
        transform.0
    }
}

impl AffineTransform {
    pub const IDENTITY: Self = Self(Affine::IDENTITY);

    #[must_use]
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Builds a transform from row-order coefficients
    /// `[scale_x, skew_x, translate_x, skew_y, scale_y, translate_y]`.
    #[must_use]
    pub fn from_coefficients(coefficients: [f64; 6]) -> Self {
        let [scale_x, skew_x, translate_x, skew_y, scale_y, translate_y] = coefficients;
        Self(Affine::new([
            scale_x,
            skew_y,
            skew_x,
            scale_y,
            translate_x,
            translate_y,
        ]))
    }

    #[must_use]
    pub fn coefficients(self) -> [f64; 6] {
        let [a, b, c, d, e, f] = self.0.as_coeffs();
        [a, c, e, b, d, f]
    }

    #[must_use]
    pub fn as_affine(self) -> Affine {
        self.0
    }

    #[must_use]
    pub fn scale_x(self) -> f64 {
        self.0.as_coeffs()[0]
    }

    #[must_use]
    pub fn skew_y(self) -> f64 {
        self.0.as_coeffs()[1]
    }

    #[must_use]
    pub fn skew_x(self) -> f64 {
        self.0.as_coeffs()[2]
    }

    #[must_use]
    pub fn scale_y(self) -> f64 {
        self.0.as_coeffs()[3]
    }

    #[must_use]
    pub fn translate_x(self) -> f64 {
        self.0.as_coeffs()[4]
    }

    #[must_use]
    pub fn translate_y(self) -> f64 {
        self.0.as_coeffs()[5]
    }

    #[must_use]
    pub fn translation(dx: f64, dy: f64) -> Self {
        Self(Affine::translate(Vec2::new(dx, dy)))
    }

    #[must_use]
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self(Affine::scale_non_uniform(sx, sy))
    }

    /// Scaling that keeps `(pivot_x, pivot_y)` fixed.
    #[must_use]
    pub fn scaling_around(sx: f64, sy: f64, pivot_x: f64, pivot_y: f64) -> Self {
        let pivot = Vec2::new(pivot_x, pivot_y);
        Self(
            Affine::translate(pivot)
                * Affine::scale_non_uniform(sx, sy)
                * Affine::translate(-pivot),
        )
    }

    /// Returns `self * other`: `other` is applied first, then `self`.
    #[must_use]
    pub fn concat(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }

    /// Applies `self` first, then `next`.
    #[must_use]
    pub fn then(self, next: Self) -> Self {
        next.concat(self)
    }

    #[must_use]
    pub fn post_translate(self, dx: f64, dy: f64) -> Self {
        self.then(Self::translation(dx, dy))
    }

    #[must_use]
    pub fn post_scale(self, sx: f64, sy: f64) -> Self {
        self.then(Self::scaling(sx, sy))
    }

    #[must_use]
    pub fn post_scale_around(self, sx: f64, sy: f64, pivot_x: f64, pivot_y: f64) -> Self {
        self.then(Self::scaling_around(sx, sy, pivot_x, pivot_y))
    }

    #[must_use]
    pub fn pre_translate(self, dx: f64, dy: f64) -> Self {
        self.concat(Self::translation(dx, dy))
    }

    #[must_use]
    pub fn pre_scale(self, sx: f64, sy: f64) -> Self {
        self.concat(Self::scaling(sx, sy))
    }

    #[must_use]
    pub fn determinant(self) -> f64 {
        self.0.determinant()
    }

    /// Returns the inverse transform, or `None` when the matrix is singular or
    /// not finite.
    #[must_use]
    pub fn invert(self) -> Option<Self> {
        // kurbo hands back inf/NaN coefficients for a singular matrix.
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }

        let inverse = Self(self.0.inverse());
        inverse.is_finite().then_some(inverse)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    #[must_use]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }

    #[must_use]
    pub fn map_point(self, point: Point) -> Point {
        let mapped = self.0 * kurbo::Point::new(point.x, point.y);
        Point::new(mapped.x, mapped.y)
    }

    pub fn map_points(self, points: &mut [Point]) {
        for point in points.iter_mut() {
            *point = self.map_point(*point);
        }
    }

    /// Maps all four corners and returns their bounding box.
    #[must_use]
    pub fn map_rect(self, rect: ContentRect) -> ContentRect {
        let mapped = self
            .0
            .transform_rect_bbox(Rect::new(rect.left, rect.top, rect.right, rect.bottom));
        ContentRect::new(mapped.x0, mapped.y0, mapped.x1, mapped.y1)
    }
}

#[cfg(test)]
mod tests {
    use super::AffineTransform;
    use crate::core::types::{ContentRect, Point};

    #[test]
    fn post_ops_apply_after_existing_transform() {
        let transform = AffineTransform::translation(10.0, 0.0).post_scale(2.0, 2.0);
        assert_eq!(transform.map_point(Point::new(1.0, 1.0)), Point::new(22.0, 2.0));

        let transform = AffineTransform::translation(10.0, 0.0).pre_scale(2.0, 2.0);
        assert_eq!(transform.map_point(Point::new(1.0, 1.0)), Point::new(12.0, 2.0));
    }

    #[test]
    fn scaling_around_pivot_keeps_pivot_fixed() {
        let transform = AffineTransform::scaling_around(3.0, 0.5, 40.0, 80.0);
        assert_eq!(transform.map_point(Point::new(40.0, 80.0)), Point::new(40.0, 80.0));
    }

    #[test]
    fn row_order_coefficients_map_onto_kurbo_layout() {
        let transform = AffineTransform::from_coefficients([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(transform.as_affine().as_coeffs(), [1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        assert_eq!(transform.skew_x(), 2.0);
        assert_eq!(transform.translate_y(), 6.0);
    }

    #[test]
    fn inverse_undoes_skewed_transform() {
        let transform = AffineTransform::from_coefficients([0.0, 2.0, 5.0, -4.0, 0.0, 9.0]);
        let inverse = transform.invert().expect("invertible");
        let point = Point::new(3.0, -7.0);
        let round_trip = inverse.map_point(transform.map_point(point));
        assert!((round_trip.x - point.x).abs() <= 1e-12);
        assert!((round_trip.y - point.y).abs() <= 1e-12);
    }

    #[test]
    fn singular_transform_has_no_inverse() {
        assert!(AffineTransform::scaling(0.0, 1.0).invert().is_none());
        assert!(AffineTransform::scaling(f64::NAN, 1.0).invert().is_none());
    }

    #[test]
    fn mirrored_rect_is_normalized() {
        let transform = AffineTransform::scaling(1.0, -1.0);
        let mapped = transform.map_rect(ContentRect::new(0.0, 10.0, 5.0, 20.0));
        assert_eq!(mapped, ContentRect::new(0.0, -20.0, 5.0, -10.0));
    }
}
