use super::knot::Knot;
use crate::constants::{CHORD_EPSILON, DEFAULT_CARDINAL_TENSION, DEFAULT_CENTRIPETAL_ALPHA};
use itertools::Itertools;
use log::debug;
use nalgebra::{Matrix4, Matrix4x3, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Power basis coefficients of one cubic segment. Row `k` holds the
/// coefficient of `u^k`, column `d` the spatial dimension `d`.
pub type SegmentMatrix = Matrix4x3<f64>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationStyle {
    Hermite,
    Bezier,
    Cardinal,
    CentripetalCatmullRom,
}

impl InterpolationStyle {
    pub fn basis(&self) -> &'static dyn SegmentBasis {
        match self {
            Self::Hermite => &HermiteBasis,
            Self::Bezier => &BezierBasis,
            Self::Cardinal => &CardinalBasis,
            Self::CentripetalCatmullRom => &CentripetalBasis,
        }
    }

    /// Number of consecutive knots a single segment depends on.
    pub fn window_len(&self) -> usize {
        self.basis().window_len()
    }

    pub fn min_knots(&self) -> usize {
        self.window_len()
    }

    pub fn segment_count(&self, knot_count: usize) -> usize {
        knot_count.saturating_sub(self.window_len() - 1)
    }

    pub fn default_shape(&self) -> f64 {
        match self {
            Self::Hermite | Self::Bezier => 0.0,
            Self::Cardinal => DEFAULT_CARDINAL_TENSION,
            Self::CentripetalCatmullRom => DEFAULT_CENTRIPETAL_ALPHA,
        }
    }
}

/// Maps the knots a segment depends on to that segment's cubic coefficients.
pub trait SegmentBasis {
    fn window_len(&self) -> usize;

    /// `window` holds exactly `window_len()` knots.
    fn build(&self, window: &[Knot], shape: f64) -> SegmentMatrix;
}

fn geometry(rows: [Vector3<f64>; 4]) -> Matrix4x3<f64> {
    Matrix4x3::from_rows(&rows.map(|row| row.transpose()))
}

#[rustfmt::skip]
fn hermite_characteristic() -> Matrix4<f64> {
    Matrix4::new(
         1.0,  0.0,  0.0,  0.0,
         0.0,  1.0,  0.0,  0.0,
        -3.0, -2.0,  3.0, -1.0,
         2.0,  1.0, -2.0,  1.0,
    )
}

fn hermite(p0: Point3<f64>, t0: Vector3<f64>, p1: Point3<f64>, t1: Vector3<f64>) -> SegmentMatrix {
    hermite_characteristic() * geometry([p0.coords, t0, p1.coords, t1])
}

pub struct HermiteBasis;

impl SegmentBasis for HermiteBasis {
    fn window_len(&self) -> usize {
        2
    }

    fn build(&self, window: &[Knot], _shape: f64) -> SegmentMatrix {
        let (k0, k1) = (window[0], window[1]);
        hermite(k0.position, k0.tangent, k1.position, k1.tangent)
    }
}

pub struct BezierBasis;

impl SegmentBasis for BezierBasis {
    fn window_len(&self) -> usize {
        2
    }

    #[rustfmt::skip]
    fn build(&self, window: &[Knot], _shape: f64) -> SegmentMatrix {
        let (k0, k1) = (window[0], window[1]);
        let characteristic = Matrix4::new(
             1.0,  0.0,  0.0, 0.0,
            -3.0,  3.0,  0.0, 0.0,
             3.0, -6.0,  3.0, 0.0,
            -1.0,  3.0, -3.0, 1.0,
        );

        characteristic
            * geometry([
                k0.position.coords,
                k0.position.coords + k0.tangent,
                k1.position.coords - k1.tangent,
                k1.position.coords,
            ])
    }
}

pub struct CardinalBasis;

impl SegmentBasis for CardinalBasis {
    fn window_len(&self) -> usize {
        4
    }

    #[rustfmt::skip]
    fn build(&self, window: &[Knot], tension: f64) -> SegmentMatrix {
        let s = tension;
        let characteristic = Matrix4::new(
             0.0,       1.0,             0.0,  0.0,
              -s,       0.0,               s,  0.0,
           2.0 * s, s - 3.0, 3.0 - 2.0 * s,   -s,
              -s,   2.0 - s,         s - 2.0,    s,
        );

        characteristic
            * geometry([
                window[0].position.coords,
                window[1].position.coords,
                window[2].position.coords,
                window[3].position.coords,
            ])
    }
}

pub struct CentripetalBasis;

impl CentripetalBasis {
    // (to - from) / span, or nothing when the parameter span has collapsed.
    fn difference(from: Point3<f64>, to: Point3<f64>, span: f64) -> Vector3<f64> {
        if Self::is_degenerate(span) {
            debug!("dropping degenerate chord term (span {span})");
            Vector3::zeros()
        } else {
            (to - from) / span
        }
    }

    // Non-finite spans come from zero chords raised to a negative exponent.
    fn is_degenerate(span: f64) -> bool {
        !(span.is_finite() && span >= CHORD_EPSILON)
    }
}

impl SegmentBasis for CentripetalBasis {
    fn window_len(&self) -> usize {
        4
    }

    fn build(&self, window: &[Knot], alpha: f64) -> SegmentMatrix {
        let [p0, p1, p2, p3] = [0, 1, 2, 3].map(|i| window[i].position);

        let chord_params: Vec<f64> = [p0, p1, p2, p3]
            .iter()
            .tuple_windows()
            .map(|(a, b)| (b - a).norm().powf(alpha))
            .scan(0.0, |acc, chord| {
                *acc += chord;
                Some(*acc)
            })
            .collect();
        let (t0, t1, t2, t3) = (0.0, chord_params[0], chord_params[1], chord_params[2]);

        let scale = t2 - t1;
        let (tangent1, tangent2) = if Self::is_degenerate(scale) {
            (Vector3::zeros(), Vector3::zeros())
        } else {
            let tangent1 = Self::difference(p0, p1, t1 - t0) - Self::difference(p0, p2, t2 - t0)
                + Self::difference(p1, p2, t2 - t1);
            let tangent2 = Self::difference(p1, p2, t2 - t1) - Self::difference(p1, p3, t3 - t1)
                + Self::difference(p2, p3, t3 - t2);
            (tangent1 * scale, tangent2 * scale)
        };

        hermite(p1, tangent1, p2, tangent2)
    }
}
