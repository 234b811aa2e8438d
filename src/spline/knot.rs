use nalgebra::{Point3, Vector3};

/// A control point together with its local direction estimate.
///
/// Hermite splines use `tangent` as the velocity at the knot. Bezier splines
/// read it as the offset from the knot to its neighbouring interior control
/// points. Cardinal and centripetal Catmull-Rom splines derive their own
/// tangents and ignore it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Knot {
    pub position: Point3<f64>,
    pub tangent: Vector3<f64>,
}

impl Knot {
    pub fn new(position: Point3<f64>, tangent: Vector3<f64>) -> Self {
        Self { position, tangent }
    }

    pub fn at(position: Point3<f64>) -> Self {
        Self {
            position,
            tangent: Vector3::zeros(),
        }
    }
}

impl Default for Knot {
    fn default() -> Self {
        Self::at(Point3::origin())
    }
}
