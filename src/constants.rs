pub const DEFAULT_CARDINAL_TENSION: f64 = 0.5;
pub const DEFAULT_CENTRIPETAL_ALPHA: f64 = 0.5;

/// Parameter spans below this are treated as coincident knots.
pub const CHORD_EPSILON: f64 = 1e-12;
pub const FRAME_EPSILON: f64 = 1e-12;
