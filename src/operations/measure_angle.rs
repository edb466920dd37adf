use crate::geometry::AngleTriple;
use crate::math::angle_3d::unsigned_angle_deg;
use crate::math::Point3;

/// Result of measuring the angle at the vertex of a triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AngleMeasurement {
    /// Unsigned angle in degrees, in `[0, 180]`.
    Measured(f64),
    /// A ray endpoint coincides with the vertex, so the angle is undefined.
    Degenerate,
}

impl AngleMeasurement {
    /// Returns the measured angle in degrees, or `0.0` for a degenerate triple.
    #[must_use]
    pub fn degrees(self) -> f64 {
        match self {
            Self::Measured(deg) => deg,
            Self::Degenerate => 0.0,
        }
    }

    /// Returns `true` if the angle could not be measured.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        matches!(self, Self::Degenerate)
    }
}

/// Measures the unsigned angle at vertex `B` between the rays `B→A` and `B→C`.
pub struct MeasureAngle {
    triple: AngleTriple,
}

impl MeasureAngle {
    /// Creates a new `MeasureAngle` operation for the points `A`, `B`, `C`.
    #[must_use]
    pub fn new(a: Point3, b: Point3, c: Point3) -> Self {
        Self::from_triple(AngleTriple::new(a, b, c))
    }

    /// Creates a new `MeasureAngle` operation for an existing triple.
    #[must_use]
    pub fn from_triple(triple: AngleTriple) -> Self {
        Self { triple }
    }

    /// Executes the measurement.
    ///
    /// Returns [`AngleMeasurement::Degenerate`] if `A == B` or `C == B`.
    #[must_use]
    pub fn execute(&self) -> AngleMeasurement {
        let ba = self.triple.start - self.triple.vertex;
        let bc = self.triple.end - self.triple.vertex;
        if let Some(deg) = unsigned_angle_deg(&ba, &bc) {
            AngleMeasurement::Measured(deg)
        } else {
            tracing::trace!(vertex = ?self.triple.vertex, "ray endpoint coincides with vertex");
            AngleMeasurement::Degenerate
        }
    }
}

/// Returns the unsigned angle at `b` in degrees, `0.0` when it is undefined.
#[must_use]
pub fn compute_angle(a: Point3, b: Point3, c: Point3) -> f64 {
    MeasureAngle::new(a, b, c).execute().degrees()
}
