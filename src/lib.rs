pub mod board;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use error::{ProtractorError, Result};
pub use operations::compute_angle;
pub use tessellation::build_arc;
