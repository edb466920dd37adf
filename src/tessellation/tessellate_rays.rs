use crate::geometry::AngleTriple;

use super::Polyline;

/// Produces the two line segments drawn from the ray endpoints to the vertex.
#[derive(Debug, Clone)]
pub struct TessellateRays {
    triple: AngleTriple,
}

impl TessellateRays {
    /// Creates a new `TessellateRays` operation.
    #[must_use]
    pub fn new(triple: AngleTriple) -> Self {
        Self { triple }
    }

    /// Returns the segments `A → B` and `C → B`.
    #[must_use]
    pub fn execute(&self) -> [Polyline; 2] {
        let t = &self.triple;
        [
            Polyline {
                points: vec![t.start, t.vertex],
            },
            Polyline {
                points: vec![t.end, t.vertex],
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point3;

    #[test]
    fn segments_end_at_vertex() {
        let triple = AngleTriple::new(
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 0.5, 0.0),
            Point3::new(0.0, 1.0, 2.0),
        );
        let [ab, cb] = TessellateRays::new(triple).execute();
        assert_eq!(ab.points, vec![triple.start, triple.vertex]);
        assert_eq!(cb.points, vec![triple.end, triple.vertex]);
    }
}
