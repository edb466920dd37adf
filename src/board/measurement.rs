use crate::error::Result;
use crate::geometry::AngleTriple;
use crate::math::Point3;
use crate::operations::{AngleMeasurement, MeasureAngle};
use crate::tessellation::{ArcMesh, Polyline, TessellateArc, TessellateRays};

use super::BoardConfig;

slotmap::new_key_type! {
    /// Unique identifier for a measurement on a board.
    pub struct MeasurementId;
}

/// Text shown next to a measured angle.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleLabel {
    /// Formatted angle, e.g. `"90.0°"`.
    pub text: String,
    /// World position the label is anchored at.
    pub anchor: Point3,
}

impl AngleLabel {
    fn new(degrees: f64, anchor: Point3, precision: usize) -> Self {
        Self {
            text: format!("{degrees:.precision$}°"),
            anchor,
        }
    }
}

/// A completed angle measurement and everything needed to display it.
///
/// Rebuilt as a whole whenever one of its points moves; `revision` tells
/// the renderer that previously displayed geometry is stale.
#[derive(Debug, Clone)]
pub struct Measurement {
    triple: AngleTriple,
    angle: AngleMeasurement,
    arc: ArcMesh,
    arc_origin: Point3,
    rays: [Polyline; 2],
    label: AngleLabel,
    revision: u64,
}

impl Measurement {
    pub(super) fn build(triple: AngleTriple, config: &BoardConfig, revision: u64) -> Result<Self> {
        let angle = MeasureAngle::from_triple(triple).execute();
        let arc = TessellateArc::from_triple(triple, config.arc_radius, config.arc).execute()?;
        let up = *config.arc.frame.up();

        Ok(Self {
            triple,
            angle,
            arc_origin: arc.center + up * config.arc_lift,
            arc,
            rays: TessellateRays::new(triple).execute(),
            label: AngleLabel::new(
                angle.degrees(),
                triple.vertex + up * config.label_height,
                config.label_precision,
            ),
            revision,
        })
    }

    /// Returns the measured points.
    #[must_use]
    pub fn triple(&self) -> &AngleTriple {
        &self.triple
    }

    /// Returns the angle at the vertex.
    #[must_use]
    pub fn angle(&self) -> AngleMeasurement {
        self.angle
    }

    /// Returns the arc fan, in coordinates local to [`Self::arc_origin`].
    #[must_use]
    pub fn arc(&self) -> &ArcMesh {
        &self.arc
    }

    /// Returns where the arc mesh is placed: the vertex lifted along world up.
    #[must_use]
    pub fn arc_origin(&self) -> &Point3 {
        &self.arc_origin
    }

    /// Returns the arc vertices placed at [`Self::arc_origin`] in world space.
    #[must_use]
    pub fn arc_world_vertices(&self) -> Vec<Point3> {
        self.arc
            .vertices
            .iter()
            .map(|v| self.arc_origin + v.coords)
            .collect()
    }

    /// Returns the segments `A → B` and `C → B`.
    #[must_use]
    pub fn rays(&self) -> &[Polyline; 2] {
        &self.rays
    }

    /// Returns the angle label.
    #[must_use]
    pub fn label(&self) -> &AngleLabel {
        &self.label
    }

    /// Returns how many times the measurement has been rebuilt.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
