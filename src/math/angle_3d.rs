//! 3D direction and angle utilities.
//!
//! Angles are unsigned and measured in degrees; the orientation of the
//! two directions relative to each other is not preserved.

use super::{Point3, Vector3, TOLERANCE};

/// Returns the unit direction pointing from `from` to `to`.
///
/// Returns `None` when the two points coincide within [`TOLERANCE`].
#[must_use]
pub fn unit_direction(from: &Point3, to: &Point3) -> Option<Vector3> {
    let d = to - from;
    let len = d.norm();
    if len < TOLERANCE {
        return None;
    }
    Some(d / len)
}

/// Returns the unsigned angle between two vectors in degrees, in `[0, 180]`.
///
/// Returns `None` if either vector is zero-length.
#[must_use]
pub fn unsigned_angle_deg(u: &Vector3, v: &Vector3) -> Option<f64> {
    let lu = u.norm();
    let lv = v.norm();
    if lu < TOLERANCE || lv < TOLERANCE {
        return None;
    }
    // Clamp guards acos against rounding just outside [-1, 1].
    let cos = (u.dot(v) / (lu * lv)).clamp(-1.0, 1.0);
    Some(cos.acos().to_degrees())
}

/// Normalizes `v`, returning the zero vector when it is too short to normalize.
#[must_use]
pub fn normalize_or_zero(v: &Vector3) -> Vector3 {
    let len = v.norm();
    if len < TOLERANCE {
        Vector3::zeros()
    } else {
        v / len
    }
}
