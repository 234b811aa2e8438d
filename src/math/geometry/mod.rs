pub mod curvable;
pub mod frame;
