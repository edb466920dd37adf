mod tessellate_arc;
mod tessellate_rays;

pub use tessellate_arc::{build_arc, TessellateArc};
pub use tessellate_rays::TessellateRays;

use crate::error::{Result, TessellationError};
use crate::geometry::WorldFrame;
use crate::math::{Point3, Vector3};

/// Upper limit on fan segments for a single arc.
pub const MAX_SEGMENTS: usize = 1 << 16;

/// Largest sweep an arc can have, in degrees.
const MAX_SWEEP_DEG: f64 = 180.0;

/// Parameters controlling arc tessellation.
#[derive(Debug, Clone, Copy)]
pub struct ArcParams {
    /// Minimum number of fan segments, applied however small the sweep is.
    pub min_segments: usize,
    /// Sweep covered by one segment, in degrees.
    pub degrees_per_segment: f64,
    /// Cross product length below which the two arc directions are
    /// treated as parallel.
    pub normal_tolerance: f64,
    /// World axes for the parallel-direction fallback.
    pub frame: WorldFrame,
}

impl Default for ArcParams {
    fn default() -> Self {
        Self {
            min_segments: 4,
            degrees_per_segment: 10.0,
            normal_tolerance: 1e-3,
            frame: WorldFrame::default(),
        }
    }
}

impl ArcParams {
    /// Number of fan segments for a sweep of `angle_deg` degrees.
    ///
    /// One segment per `degrees_per_segment` of sweep, rounded down, but
    /// never fewer than `min_segments`. No cap is applied here; a quotient
    /// too large for `usize` saturates to `usize::MAX`, and
    /// [`TessellateArc::execute`] rejects counts above [`MAX_SEGMENTS`].
    ///
    /// The count follows the angle as computed, not the ideal one: a sweep
    /// of exactly 60 degrees typically measures `59.99999999999999` and
    /// yields 5 segments, not 6.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn segment_count(&self, angle_deg: f64) -> usize {
        let n = (angle_deg / self.degrees_per_segment).floor();
        // Float-to-int `as` saturates, so finite huge values become usize::MAX.
        let n = if n.is_nan() || n <= 0.0 {
            0
        } else if n.is_infinite() {
            usize::MAX
        } else {
            n as usize
        };
        n.max(self.min_segments)
    }

    /// Checks that the parameters can produce a mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_segments` is zero or above [`MAX_SEGMENTS`],
    /// if `degrees_per_segment` / `normal_tolerance` are not positive and
    /// finite, or if a 180 degree sweep would need more than
    /// [`MAX_SEGMENTS`] segments.
    #[allow(clippy::cast_precision_loss)]
    pub fn validate(&self) -> Result<()> {
        if self.min_segments == 0 || self.min_segments > MAX_SEGMENTS {
            return Err(TessellationError::InvalidParameters(format!(
                "min_segments must be in [1, {MAX_SEGMENTS}], got {}",
                self.min_segments
            ))
            .into());
        }
        if !(self.degrees_per_segment.is_finite() && self.degrees_per_segment > 0.0) {
            return Err(TessellationError::InvalidParameters(
                "degrees_per_segment must be positive".to_owned(),
            )
            .into());
        }
        if MAX_SWEEP_DEG / self.degrees_per_segment > MAX_SEGMENTS as f64 {
            return Err(TessellationError::InvalidParameters(format!(
                "degrees_per_segment {} needs more than {MAX_SEGMENTS} segments",
                self.degrees_per_segment
            ))
            .into());
        }
        if !(self.normal_tolerance.is_finite() && self.normal_tolerance > 0.0) {
            return Err(TessellationError::InvalidParameters(
                "normal_tolerance must be positive".to_owned(),
            )
            .into());
        }
        Ok(())
    }
}

/// A polyline approximation of a curve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point3>,
}

/// A triangle fan approximating the sector swept by an arc.
///
/// Vertices are expressed relative to `center`. Vertex 0 is the center
/// itself, followed by `segments + 1` points along the arc boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcMesh {
    /// Vertex positions in the local frame anchored at `center`.
    pub vertices: Vec<Point3>,
    /// Vertex normals, all equal to the arc plane normal.
    pub normals: Vec<Vector3>,
    /// Triangle indices (each triple defines a triangle).
    pub triangles: Vec<[u32; 3]>,
    /// World position of the arc center.
    pub center: Point3,
    /// Swept angle in degrees.
    pub angle: f64,
}

impl ArcMesh {
    /// Returns the number of fan segments.
    #[must_use]
    pub fn segments(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the vertices translated to world space.
    #[must_use]
    pub fn world_vertices(&self) -> Vec<Point3> {
        self.vertices
            .iter()
            .map(|v| self.center + v.coords)
            .collect()
    }
}
