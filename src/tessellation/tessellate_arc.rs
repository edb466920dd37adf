use crate::error::{Result, TessellationError};
use crate::geometry::{AngleTriple, ArcSpec};
use crate::math::{Point3, Vector3};
use crate::operations::{AngleMeasurement, MeasureAngle};

use super::{ArcMesh, ArcParams, MAX_SEGMENTS};

/// Tessellates the sector swept at vertex `B` between the rays `B→A` and
/// `B→C` into a triangle fan.
///
/// The fan starts on the `B→A` ray and turns toward `B→C` by the unsigned
/// angle between them. Collinear and coincident points still produce a
/// mesh: the arc plane then falls back to the world axes in [`ArcParams`].
#[derive(Debug, Clone)]
pub struct TessellateArc {
    triple: AngleTriple,
    radius: f64,
    params: ArcParams,
}

impl TessellateArc {
    /// Creates a new `TessellateArc` operation for the points `A`, `B`, `C`.
    #[must_use]
    pub fn new(a: Point3, b: Point3, c: Point3, radius: f64, params: ArcParams) -> Self {
        Self::from_triple(AngleTriple::new(a, b, c), radius, params)
    }

    /// Creates a new `TessellateArc` operation for an existing triple.
    #[must_use]
    pub fn from_triple(triple: AngleTriple, radius: f64, params: ArcParams) -> Self {
        Self {
            triple,
            radius,
            params,
        }
    }

    /// Measures the triple and derives the arc it sweeps.
    #[must_use]
    pub fn arc_spec(&self) -> (AngleMeasurement, ArcSpec) {
        let measurement = MeasureAngle::from_triple(self.triple).execute();
        let spec = ArcSpec::new(
            self.triple.vertex,
            self.triple.start_direction().unwrap_or_else(Vector3::zeros),
            self.triple.end_direction().unwrap_or_else(Vector3::zeros),
            measurement.degrees(),
            self.radius,
            &self.params.frame,
            self.params.normal_tolerance,
        );
        (measurement, spec)
    }

    /// Executes the tessellation, producing the fan mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive and finite, if the
    /// parameters are invalid, or if the segment count exceeds
    /// [`MAX_SEGMENTS`].
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<ArcMesh> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(TessellationError::InvalidParameters(format!(
                "arc radius must be positive, got {}",
                self.radius
            ))
            .into());
        }
        self.params.validate()?;

        let (_, spec) = self.arc_spec();
        let angle = spec.sweep_degrees();
        let segments = self.params.segment_count(angle);
        let segment_count = u32::try_from(segments)
            .ok()
            .filter(|_| segments <= MAX_SEGMENTS)
            .ok_or_else(|| {
                TessellationError::InvalidParameters(format!(
                    "{segments} segments exceed the limit of {MAX_SEGMENTS}"
                ))
            })?;

        let mut vertices = Vec::with_capacity(segments + 2);
        vertices.push(Point3::origin());
        for i in 0..=segments {
            let t = i as f64 / segments as f64;
            vertices.push(Point3::from(spec.offset_at(t)));
        }

        let normals = vec![*spec.normal(); vertices.len()];
        let triangles = (0..segment_count).map(|i| [0, i + 1, i + 2]).collect();

        Ok(ArcMesh {
            vertices,
            normals,
            triangles,
            center: *spec.center(),
            angle,
        })
    }
}

/// Builds the arc fan at `b` with default [`ArcParams`].
///
/// # Errors
///
/// Returns an error if `radius` is not positive and finite.
pub fn build_arc(a: Point3, b: Point3, c: Point3, radius: f64) -> Result<ArcMesh> {
    TessellateArc::new(a, b, c, radius, ArcParams::default()).execute()
}
