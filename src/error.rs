use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplineError {
    #[error("storage too small: {required} bytes required, {provided} provided")]
    Config { required: usize, provided: usize },
    #[error("knot index {index} out of bounds for {len} knots")]
    Bounds { index: usize, len: usize },
    #[error("knot capacity of {capacity} reached")]
    Capacity { capacity: usize },
    #[error("spline has {knots} knots but at least {required} are needed for evaluation")]
    State { knots: usize, required: usize },
    #[error("shape parameter {value} is not valid for this style")]
    InvalidShape { value: f64 },
    #[error("curve has no tangent direction at t = {t}")]
    DegenerateTangent { t: f64 },
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
