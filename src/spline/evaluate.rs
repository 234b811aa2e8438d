use super::basis::SegmentMatrix;
use crate::math::bernstein_polynomial::BernsteinPolynomial;
use nalgebra::{Point3, Vector3};

pub type BernsteinTuple = (Point3<f64>, Point3<f64>, Point3<f64>, Point3<f64>);

/// Splits a global curve parameter into a segment index and the local
/// parameter inside it, clamped to the range spanned by `knot_count` knots.
pub fn map_parameter(knot_count: usize, t: f64) -> (usize, f64) {
    if knot_count < 2 || t.is_nan() || t <= 0.0 {
        return (0, 0.0);
    }

    let last = (knot_count - 1) as f64;
    if t >= last {
        return (knot_count - 2, 1.0);
    }

    let segment = t.floor();
    (segment as usize, t - segment)
}

fn coefficients(m: &SegmentMatrix) -> [Vector3<f64>; 4] {
    [0, 1, 2, 3].map(|k| m.row(k).transpose())
}

pub fn position(m: &SegmentMatrix, u: f64) -> Point3<f64> {
    let [c0, c1, c2, c3] = coefficients(m);
    Point3::from(((c3 * u + c2) * u + c1) * u + c0)
}

pub fn velocity(m: &SegmentMatrix, u: f64) -> Vector3<f64> {
    let [_, c1, c2, c3] = coefficients(m);
    (c3 * (3.0 * u) + c2 * 2.0) * u + c1
}

pub fn acceleration(m: &SegmentMatrix, u: f64) -> Vector3<f64> {
    let [_, _, c2, c3] = coefficients(m);
    c3 * (6.0 * u) + c2 * 2.0
}

/// Re-expresses a power basis segment as its four cubic Bezier control points.
pub fn bezier_control_points(m: &SegmentMatrix) -> BernsteinTuple {
    let columns = [0, 1, 2].map(|d| {
        BernsteinPolynomial::from_power_basis([0, 1, 2, 3].map(|k| m[(k, d)]))
    });

    let point = |i: usize| {
        Point3::new(
            columns[0].coeffs[i],
            columns[1].coeffs[i],
            columns[2].coeffs[i],
        )
    };

    (point(0), point(1), point(2), point(3))
}
