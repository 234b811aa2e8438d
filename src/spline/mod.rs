pub mod basis;
pub mod evaluate;
pub mod knot;
pub mod storage;

use crate::{error::SplineError, math::geometry::frame::Frame};
use basis::{InterpolationStyle, SegmentMatrix};
use evaluate::BernsteinTuple;
use knot::Knot;
use log::{debug, trace};
use nalgebra::{Point3, Vector3};
use std::ops::RangeInclusive;
use storage::{required_buffer_size, SplineStorage};

/// An editable cubic spline over a fixed-capacity run of knots.
///
/// Every segment's coefficients are cached. Mutating a knot rebuilds only the
/// segments whose knot window contains it, so edits stay proportional to the
/// window size regardless of how long the curve is.
#[derive(Clone, Debug)]
pub struct Spline {
    style: InterpolationStyle,
    shape: f64,
    storage: SplineStorage,
    num_knots: usize,
    max_num_knots: usize,
    num_segments: usize,
}

impl Spline {
    pub fn init(
        style: InterpolationStyle,
        max_num_knots: usize,
        storage: SplineStorage,
    ) -> Result<Self, SplineError> {
        if !storage.fits(style, max_num_knots) {
            return Err(SplineError::Config {
                required: required_buffer_size(style, max_num_knots),
                provided: storage.byte_size(),
            });
        }

        debug!(
            "initialized {style:?} spline for {max_num_knots} knots ({} bytes)",
            storage.byte_size()
        );

        Ok(Self {
            style,
            shape: style.default_shape(),
            storage,
            num_knots: 0,
            max_num_knots,
            num_segments: 0,
        })
    }

    /// Allocates storage of exactly the required size.
    pub fn with_capacity(style: InterpolationStyle, max_num_knots: usize) -> Self {
        Self {
            style,
            shape: style.default_shape(),
            storage: SplineStorage::for_style(style, max_num_knots),
            num_knots: 0,
            max_num_knots,
            num_segments: 0,
        }
    }

    pub fn into_storage(self) -> SplineStorage {
        self.storage
    }

    pub fn style(&self) -> InterpolationStyle {
        self.style
    }

    pub fn tension(&self) -> f64 {
        self.shape
    }

    pub fn num_knots(&self) -> usize {
        self.num_knots
    }

    pub fn max_num_knots(&self) -> usize {
        self.max_num_knots
    }

    pub fn num_segments(&self) -> usize {
        self.num_segments
    }

    pub fn knots(&self) -> &[Knot] {
        &self.storage.knots[..self.num_knots]
    }

    pub fn knot(&self, index: usize) -> Option<&Knot> {
        self.knots().get(index)
    }

    pub fn segment_matrices(&self) -> &[SegmentMatrix] {
        &self.storage.segments[..self.num_segments]
    }

    pub fn segment_matrix(&self, index: usize) -> Option<&SegmentMatrix> {
        self.segment_matrices().get(index)
    }

    pub fn is_evaluable(&self) -> bool {
        self.num_segments > 0
    }

    pub fn parameter_range(&self) -> RangeInclusive<f64> {
        0.0..=self.num_segments as f64
    }

    /// Sets the shape scalar: tension for Cardinal splines, the chord exponent
    /// for centripetal Catmull-Rom, which must not be negative. Hermite and Bezier
    /// splines store but ignore it.
    pub fn set_tension(&mut self, value: f64) -> Result<(), SplineError> {
        let negative_exponent =
            self.style == InterpolationStyle::CentripetalCatmullRom && value < 0.0;
        if !value.is_finite() || negative_exponent {
            return Err(SplineError::InvalidShape { value });
        }

        if value == self.shape {
            return Ok(());
        }

        debug!("shape {} -> {value}, rebuilding {} segments", self.shape, self.num_segments);
        self.shape = value;
        for segment in 0..self.num_segments {
            self.rebuild_segment(segment);
        }

        Ok(())
    }

    pub fn insert_knot(&mut self, index: usize, knot: Knot) -> Result<(), SplineError> {
        if index > self.num_knots {
            return Err(SplineError::Bounds {
                index,
                len: self.num_knots,
            });
        }

        if self.num_knots >= self.max_num_knots {
            return Err(SplineError::Capacity {
                capacity: self.max_num_knots,
            });
        }

        let old_segments = self.num_segments;
        self.storage.knots.copy_within(index..self.num_knots, index + 1);
        self.num_knots += 1;
        self.num_segments = self.style.segment_count(self.num_knots);

        // Segments lying wholly after the new knot keep their coefficients.
        if index < old_segments {
            self.storage
                .segments
                .copy_within(index..old_segments, index + 1);
        }

        debug!("inserted knot {index}, now {} knots", self.num_knots);
        self.write_knot(index, knot);
        Ok(())
    }

    pub fn push_knot(&mut self, knot: Knot) -> Result<(), SplineError> {
        self.insert_knot(self.num_knots, knot)
    }

    pub fn set_knot(&mut self, index: usize, knot: Knot) -> Result<(), SplineError> {
        if index >= self.num_knots {
            return Err(SplineError::Bounds {
                index,
                len: self.num_knots,
            });
        }

        self.write_knot(index, knot);
        Ok(())
    }

    pub fn remove_knot(&mut self, index: usize) -> Result<(), SplineError> {
        if index >= self.num_knots {
            return Err(SplineError::Bounds {
                index,
                len: self.num_knots,
            });
        }

        let old_segments = self.num_segments;
        self.storage.knots.copy_within(index + 1..self.num_knots, index);
        self.num_knots -= 1;
        self.num_segments = self.style.segment_count(self.num_knots);

        if index + 1 < old_segments {
            self.storage
                .segments
                .copy_within(index + 1..old_segments, index);
        }

        debug!("removed knot {index}, now {} knots", self.num_knots);
        self.rebuild_around(index);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.num_knots = 0;
        self.num_segments = 0;
    }

    fn write_knot(&mut self, index: usize, knot: Knot) {
        self.storage.knots[index] = knot;
        self.rebuild_around(index);
    }

    /// Segments whose knot window contains `knot_index`.
    fn affected_segments(&self, knot_index: usize) -> RangeInclusive<usize> {
        let first = knot_index.saturating_sub(self.style.window_len() - 1);
        let last = knot_index.min(self.num_segments.saturating_sub(1));
        first..=last
    }

    fn rebuild_around(&mut self, knot_index: usize) {
        if self.num_segments == 0 {
            return;
        }

        let segments = self.affected_segments(knot_index);
        trace!("rebuilding segments {segments:?} around knot {knot_index}");
        for segment in segments {
            self.rebuild_segment(segment);
        }
    }

    fn rebuild_segment(&mut self, segment: usize) {
        let basis = self.style.basis();
        let window = &self.storage.knots[segment..segment + basis.window_len()];
        self.storage.segments[segment] = basis.build(window, self.shape);
    }

    fn locate(&self, t: f64) -> Result<(&SegmentMatrix, f64), SplineError> {
        let (segment, u) = evaluate::map_parameter(self.num_segments + 1, t);
        match self.segment_matrix(segment) {
            Some(matrix) => Ok((matrix, u)),
            None => Err(SplineError::State {
                knots: self.num_knots,
                required: self.style.min_knots(),
            }),
        }
    }

    pub fn eval(&self, t: f64) -> Result<Point3<f64>, SplineError> {
        let (matrix, u) = self.locate(t)?;
        Ok(evaluate::position(matrix, u))
    }

    pub fn eval_velocity(&self, t: f64) -> Result<Vector3<f64>, SplineError> {
        let (matrix, u) = self.locate(t)?;
        Ok(evaluate::velocity(matrix, u))
    }

    pub fn eval_acceleration(&self, t: f64) -> Result<Vector3<f64>, SplineError> {
        let (matrix, u) = self.locate(t)?;
        Ok(evaluate::acceleration(matrix, u))
    }

    /// `samples` parameters spread evenly over [`Self::parameter_range`], both ends included.
    pub fn sample_parameters(&self, samples: usize) -> impl Iterator<Item = f64> {
        let end = self.num_segments as f64;
        let last = samples.saturating_sub(1).max(1) as f64;
        (0..samples).map(move |i| end * i as f64 / last)
    }

    pub fn frame_at(&self, t: f64, previous_normal: Vector3<f64>) -> Result<Frame, SplineError> {
        let (matrix, u) = self.locate(t)?;
        Frame::following(
            evaluate::position(matrix, u),
            evaluate::velocity(matrix, u),
            previous_normal,
        )
        .ok_or(SplineError::DegenerateTangent { t })
    }

    /// Frames at evenly spaced samples, each normal carried over from the previous frame.
    pub fn frames(
        &self,
        samples: usize,
        initial_normal: Vector3<f64>,
    ) -> Result<Vec<Frame>, SplineError> {
        let mut normal = initial_normal;
        self.sample_parameters(samples)
            .map(|t| {
                let frame = self.frame_at(t, normal)?;
                normal = frame.normal;
                Ok(frame)
            })
            .collect()
    }

    pub fn bezier_segments(&self) -> Vec<BernsteinTuple> {
        self.segment_matrices()
            .iter()
            .map(evaluate::bezier_control_points)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spline_with(style: InterpolationStyle, count: usize) -> Spline {
        let mut spline = Spline::with_capacity(style, count);
        for i in 0..count {
            let x = i as f64;
            spline
                .push_knot(Knot::at(Point3::new(x, x * x, 0.0)))
                .unwrap();
        }
        spline
    }

    #[test]
    fn affected_segments_cover_knot_window() {
        let hermite = spline_with(InterpolationStyle::Hermite, 6);
        assert_eq!(hermite.affected_segments(0), 0..=0);
        assert_eq!(hermite.affected_segments(3), 2..=3);
        assert_eq!(hermite.affected_segments(5), 4..=4);

        let cardinal = spline_with(InterpolationStyle::Cardinal, 8);
        assert_eq!(cardinal.affected_segments(0), 0..=0);
        assert_eq!(cardinal.affected_segments(2), 0..=2);
        assert_eq!(cardinal.affected_segments(5), 2..=4);
        assert_eq!(cardinal.affected_segments(7), 4..=4);
    }

    #[test]
    fn knot_accessors_respect_length() {
        let spline = spline_with(InterpolationStyle::Bezier, 3);
        assert_eq!(spline.knots().len(), 3);
        assert_eq!(spline.knot(2).unwrap().position, Point3::new(2.0, 4.0, 0.0));
        assert!(spline.knot(3).is_none());
        assert!(spline.segment_matrix(1).is_some());
        assert!(spline.segment_matrix(2).is_none());
    }

    #[test]
    fn sample_parameters_include_both_ends() {
        let spline = spline_with(InterpolationStyle::Hermite, 4);
        let params: Vec<f64> = spline.sample_parameters(4).collect();
        assert_eq!(params, vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(spline.sample_parameters(1).collect::<Vec<_>>(), vec![0.0]);
        assert_eq!(spline.sample_parameters(0).count(), 0);
    }
}
