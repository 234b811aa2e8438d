pub mod config;
pub mod constants;
pub mod error;
pub mod math;
pub mod spline;

pub use config::{KnotConfig, SplineConfig};
pub use error::SplineError;
pub use math::geometry::{curvable::Curvable, frame::Frame};
pub use spline::{
    basis::{InterpolationStyle, SegmentBasis, SegmentMatrix},
    evaluate::map_parameter,
    knot::Knot,
    storage::{required_buffer_size, SplineStorage},
    Spline,
};
