mod measure_angle;

pub use measure_angle::{compute_angle, AngleMeasurement, MeasureAngle};
