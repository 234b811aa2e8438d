pub mod bernstein_polynomial;
pub mod geometry;
pub mod utils;
