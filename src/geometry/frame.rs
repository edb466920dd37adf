use crate::error::{GeometryError, Result};
use crate::math::{Vector3, TOLERANCE};

/// World +Y.
const Y_UP: Vector3 = Vector3::new(0.0, 1.0, 0.0);

/// World +Z.
const Z_FORWARD: Vector3 = Vector3::new(0.0, 0.0, 1.0);

/// World orientation convention used when an arc plane cannot be derived
/// from its two directions.
///
/// `up` and `forward` are unit length and mutually perpendicular. The
/// default is the Y-up, Z-forward convention of common game engines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldFrame {
    up: Vector3,
    forward: Vector3,
}

impl WorldFrame {
    /// Creates a frame from an up and a forward vector.
    ///
    /// `forward` is re-orthogonalized against `up`, so only its component
    /// perpendicular to `up` matters.
    ///
    /// # Errors
    ///
    /// Returns an error if either vector is zero-length or if they are parallel.
    pub fn new(up: Vector3, forward: Vector3) -> Result<Self> {
        let up_len = up.norm();
        if up_len < TOLERANCE || forward.norm() < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let up = up / up_len;

        let forward = forward - up * forward.dot(&up);
        let forward_len = forward.norm();
        if forward_len < TOLERANCE {
            return Err(
                GeometryError::Degenerate("up and forward are parallel".into()).into(),
            );
        }

        Ok(Self {
            up,
            forward: forward / forward_len,
        })
    }

    /// Returns the world up direction.
    #[must_use]
    pub fn up(&self) -> &Vector3 {
        &self.up
    }

    /// Returns the world forward direction.
    #[must_use]
    pub fn forward(&self) -> &Vector3 {
        &self.forward
    }
}

impl Default for WorldFrame {
    fn default() -> Self {
        Self {
            up: Y_UP,
            forward: Z_FORWARD,
        }
    }
}
