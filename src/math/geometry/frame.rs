use crate::constants::FRAME_EPSILON;
use nalgebra::{Point3, Vector3};

/// Orthonormal frame travelling along a curve, suitable for sweeping a
/// cross-section (e.g. a tube) along it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    pub origin: Point3<f64>,
    pub tangent: Vector3<f64>,
    pub normal: Vector3<f64>,
    pub binormal: Vector3<f64>,
}

impl Frame {
    /// Builds a frame whose normal stays as close as possible to
    /// `previous_normal`, which keeps consecutive frames from twisting.
    /// Returns `None` when `velocity` has no usable direction.
    pub fn following(
        origin: Point3<f64>,
        velocity: Vector3<f64>,
        previous_normal: Vector3<f64>,
    ) -> Option<Self> {
        let tangent = velocity.try_normalize(FRAME_EPSILON)?;

        let binormal = tangent
            .cross(&previous_normal)
            .try_normalize(FRAME_EPSILON)
            .unwrap_or_else(|| tangent.cross(&least_aligned_axis(&tangent)).normalize());
        let normal = binormal.cross(&tangent).normalize();

        Some(Self {
            origin,
            tangent,
            normal,
            binormal,
        })
    }

    /// Point on the ring of the given radius around the frame origin.
    pub fn ring_point(&self, radius: f64, angle: f64) -> Point3<f64> {
        self.origin + self.binormal * (radius * angle.cos()) + self.normal * (radius * angle.sin())
    }
}

fn least_aligned_axis(v: &Vector3<f64>) -> Vector3<f64> {
    let abs = v.abs();
    if abs.x <= abs.y && abs.x <= abs.z {
        Vector3::x()
    } else if abs.y <= abs.z {
        Vector3::y()
    } else {
        Vector3::z()
    }
}
