use crate::error::{MeasureError, Result};
use crate::tessellation::ArcParams;

/// Presentation settings applied to every measurement on a board.
#[derive(Debug, Clone, Copy)]
pub struct BoardConfig {
    /// Radius of the arc drawn at the vertex.
    pub arc_radius: f64,
    /// Offset of the arc placement along world up, keeps it off the surface.
    pub arc_lift: f64,
    /// Height of the label anchor above the vertex, along world up.
    pub label_height: f64,
    /// Decimal places shown in the label text.
    pub label_precision: usize,
    /// Arc tessellation parameters.
    pub arc: ArcParams,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            arc_radius: 0.2,
            arc_lift: 0.01,
            label_height: 0.2,
            label_precision: 1,
            arc: ArcParams::default(),
        }
    }
}

impl BoardConfig {
    /// Checks that every measurement built with this config will succeed.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive, if an offset is not
    /// finite, or if the arc parameters are invalid.
    pub fn validate(&self) -> Result<()> {
        if !(self.arc_radius.is_finite() && self.arc_radius > 0.0) {
            return Err(MeasureError::InvalidConfig(format!(
                "arc_radius must be positive, got {}",
                self.arc_radius
            ))
            .into());
        }
        if !self.arc_lift.is_finite() || !self.label_height.is_finite() {
            return Err(
                MeasureError::InvalidConfig("offsets must be finite".to_owned()).into(),
            );
        }
        self.arc.validate()
    }
}
