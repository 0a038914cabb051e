//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::{Matrix3, Point2, Vector2};

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type used for impedances.
pub type CScalar = num_complex::Complex<Scalar>;
/// A position in the chart's log-log coordinate space (or on the page, for sinks).
pub type Point = Point2<Scalar>;
/// Homogeneous 2D transform used to place the viewport on a page.
pub type Affine = Matrix3<Scalar>;

/// Relative tolerance applied to threshold comparisons on values computed as `10^x`.
pub const RELATIVE_TOLERANCE: Scalar = 1.0e-9;

/// Shorthand for building a [`Point`].
#[inline]
#[must_use]
pub fn point(x: Scalar, y: Scalar) -> Point {
    Point::new(x, y)
}

/// Returns `10^exponent`.
#[inline]
#[must_use]
pub fn decade(exponent: i64) -> Scalar {
    10f64.powf(exponent as Scalar)
}

/// `value >= threshold`, forgiving round-off just below the threshold.
#[inline]
#[must_use]
pub fn at_least(value: Scalar, threshold: Scalar) -> bool {
    value >= threshold - threshold.abs() * RELATIVE_TOLERANCE
}

/// `value <= threshold`, forgiving round-off just above the threshold.
#[inline]
#[must_use]
pub fn at_most(value: Scalar, threshold: Scalar) -> bool {
    value <= threshold + threshold.abs() * RELATIVE_TOLERANCE
}

/// Pure translation as a homogeneous matrix.
#[must_use]
pub fn translation(dx: Scalar, dy: Scalar) -> Affine {
    Affine::new_translation(&Vector2::new(dx, dy))
}

/// Non-uniform scaling about the origin, as a homogeneous matrix.
#[must_use]
pub fn scaling(sx: Scalar, sy: Scalar) -> Affine {
    Affine::new_nonuniform_scaling(&Vector2::new(sx, sy))
}
