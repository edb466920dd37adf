use crate::math::angle_3d::normalize_or_zero;
use crate::math::{Point3, Vector3, TOLERANCE};

use super::WorldFrame;

/// Above this `|dir · up|` the world up is considered too close to the
/// start direction to span a plane with it.
const UP_PARALLEL_LIMIT: f64 = 0.9;

/// A circular arc swept around a center between two directions.
///
/// The arc lies in the plane spanned by `local_x` (the start direction)
/// and `local_y` (perpendicular to it, turned toward the end direction).
/// The parametric form sweeps from angle 0 at `t = 0` to the sweep angle
/// at `t = 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcSpec {
    center: Point3,
    start_dir: Vector3,
    end_dir: Vector3,
    normal: Vector3,
    local_x: Vector3,
    local_y: Vector3,
    sweep_deg: f64,
    radius: f64,
}

impl ArcSpec {
    /// Creates an arc spec and derives its local frame.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the arc (the measured vertex)
    /// * `start_dir` - Unit direction of the first ray, or zero if undefined
    /// * `end_dir` - Unit direction of the second ray, or zero if undefined
    /// * `sweep_deg` - Unsigned sweep in degrees, `[0, 180]`
    /// * `radius` - Arc radius, passed through unchecked
    /// * `frame` - World axes used when the directions do not span a plane
    /// * `normal_tolerance` - Cross product length below which the directions
    ///   count as parallel
    ///
    /// Never fails: parallel, anti-parallel or zero directions fall back to
    /// a plane built from the world frame.
    #[must_use]
    pub fn new(
        center: Point3,
        start_dir: Vector3,
        end_dir: Vector3,
        sweep_deg: f64,
        radius: f64,
        frame: &WorldFrame,
        normal_tolerance: f64,
    ) -> Self {
        let start_dir = normalize_or_zero(&start_dir);
        let end_dir = normalize_or_zero(&end_dir);

        let local_x = if start_dir.norm() < TOLERANCE {
            tracing::trace!("arc start direction undefined, using world forward");
            *frame.forward()
        } else {
            start_dir
        };

        let cross = local_x.cross(&end_dir);
        let normal = if cross.norm() < normal_tolerance {
            fallback_normal(&local_x, frame)
        } else {
            cross.normalize()
        };

        let local_y = normalize_or_zero(&normal.cross(&local_x));

        Self {
            center,
            start_dir,
            end_dir,
            normal,
            local_x,
            local_y,
            sweep_deg,
            radius,
        }
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the normalized start direction (zero if undefined).
    #[must_use]
    pub fn start_direction(&self) -> &Vector3 {
        &self.start_dir
    }

    /// Returns the normalized end direction (zero if undefined).
    #[must_use]
    pub fn end_direction(&self) -> &Vector3 {
        &self.end_dir
    }

    /// Returns the unit normal of the arc plane.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Returns the in-plane direction at sweep angle 0.
    #[must_use]
    pub fn local_x(&self) -> &Vector3 {
        &self.local_x
    }

    /// Returns the in-plane direction at sweep angle 90 degrees.
    #[must_use]
    pub fn local_y(&self) -> &Vector3 {
        &self.local_y
    }

    /// Returns the sweep angle in degrees.
    #[must_use]
    pub fn sweep_degrees(&self) -> f64 {
        self.sweep_deg
    }

    /// Returns the sweep angle in radians.
    #[must_use]
    pub fn sweep_radians(&self) -> f64 {
        self.sweep_deg.to_radians()
    }

    /// Offset from the center of the arc point at parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn offset_at(&self, t: f64) -> Vector3 {
        let angle = t * self.sweep_radians();
        self.local_x * (self.radius * angle.cos()) + self.local_y * (self.radius * angle.sin())
    }

    /// World position of the arc point at parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        self.center + self.offset_at(t)
    }
}

/// Plane normal for a start direction whose companion direction is parallel,
/// anti-parallel or missing.
fn fallback_normal(dir: &Vector3, frame: &WorldFrame) -> Vector3 {
    let axis = if dir.dot(frame.up()).abs() < UP_PARALLEL_LIMIT {
        frame.up()
    } else {
        frame.forward()
    };
    tracing::trace!(?axis, "arc directions are parallel, using world axis for the normal");
    normalize_or_zero(&dir.cross(axis))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    const NORMAL_TOL: f64 = 1e-3;

    fn spec(start: Vector3, end: Vector3, sweep: f64) -> ArcSpec {
        ArcSpec::new(
            Point3::origin(),
            start,
            end,
            sweep,
            1.0,
            &WorldFrame::default(),
            NORMAL_TOL,
        )
    }

    #[test]
    fn right_angle_frame() {
        let s = spec(Vector3::x(), Vector3::y(), 90.0);
        assert_abs_diff_eq!(*s.normal(), Vector3::z(), epsilon = 1e-12);
        assert_abs_diff_eq!(*s.local_x(), Vector3::x(), epsilon = 1e-12);
        assert_abs_diff_eq!(*s.local_y(), Vector3::y(), epsilon = 1e-12);
    }

    #[test]
    fn endpoints_follow_the_rays() {
        let end = Vector3::new(1.0, 1.0, 1.0).normalize();
        let sweep = Vector3::x().angle(&end).to_degrees();
        let s = spec(Vector3::x(), end, sweep);
        assert_abs_diff_eq!(s.offset_at(0.0), Vector3::x(), epsilon = 1e-12);
        assert_abs_diff_eq!(s.offset_at(1.0), end, epsilon = 1e-9);
    }

    #[test]
    fn anti_parallel_uses_world_up() {
        let s = spec(Vector3::x(), -Vector3::x(), 180.0);
        // x × up(+Y) = +Z
        assert_abs_diff_eq!(*s.normal(), Vector3::z(), epsilon = 1e-12);
        assert_abs_diff_eq!(*s.local_y(), Vector3::y(), epsilon = 1e-12);
        assert_abs_diff_eq!(s.offset_at(1.0), -Vector3::x(), epsilon = 1e-9);
    }

    #[test]
    fn vertical_directions_use_world_forward() {
        let s = spec(Vector3::y(), -Vector3::y(), 180.0);
        // y × forward(+Z) = +X
        assert_abs_diff_eq!(*s.normal(), Vector3::x(), epsilon = 1e-12);
    }

    #[test]
    fn missing_start_direction_uses_forward() {
        let s = spec(Vector3::zeros(), Vector3::x(), 0.0);
        assert_abs_diff_eq!(*s.local_x(), Vector3::z(), epsilon = 1e-12);
        assert_abs_diff_eq!(s.normal().norm(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.local_y().norm(), 1.0, epsilon = 1e-12);
        assert!(s.point_at(0.5).coords.iter().all(|c| c.is_finite()));
    }

    #[test]
    fn custom_frame_changes_fallback() {
        let frame = WorldFrame::new(Vector3::z(), Vector3::x()).unwrap();
        let s = ArcSpec::new(
            Point3::new(1.0, 2.0, 3.0),
            Vector3::y(),
            -Vector3::y(),
            180.0,
            2.0,
            &frame,
            NORMAL_TOL,
        );
        // y × up(+Z) = +X
        assert_abs_diff_eq!(*s.normal(), Vector3::x(), epsilon = 1e-12);
        assert_abs_diff_eq!(s.point_at(0.0), Point3::new(1.0, 4.0, 3.0), epsilon = 1e-12);
    }
}
