use crate::{error::SplineError, math::utils::point_64_to_32, spline::Spline};
use nalgebra::Point3;

pub trait Curvable {
    fn curve(&self, samples: usize) -> Result<Vec<Point3<f32>>, SplineError>;
}

impl Curvable for Spline {
    fn curve(&self, samples: usize) -> Result<Vec<Point3<f32>>, SplineError> {
        self.sample_parameters(samples)
            .map(|t| self.eval(t).map(point_64_to_32))
            .collect()
    }
}
