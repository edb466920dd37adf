use crate::math::angle_3d::unit_direction;
use crate::math::{Point3, Vector3};

/// Position of a point within an [`AngleTriple`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    /// First ray endpoint (A).
    Start,
    /// The vertex the angle is measured at (B).
    Vertex,
    /// Second ray endpoint (C).
    End,
}

impl Corner {
    /// All corners in pick order.
    pub const ALL: [Corner; 3] = [Corner::Start, Corner::Vertex, Corner::End];

    /// Maps a pick order index (0, 1, 2) to a corner.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Three points `A`, `B`, `C` whose angle is measured at the vertex `B`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleTriple {
    /// A.
    pub start: Point3,
    /// B.
    pub vertex: Point3,
    /// C.
    pub end: Point3,
}

impl AngleTriple {
    /// Creates a new triple.
    #[must_use]
    pub fn new(start: Point3, vertex: Point3, end: Point3) -> Self {
        Self { start, vertex, end }
    }

    /// Returns the point at `corner`.
    #[must_use]
    pub fn point(&self, corner: Corner) -> Point3 {
        match corner {
            Corner::Start => self.start,
            Corner::Vertex => self.vertex,
            Corner::End => self.end,
        }
    }

    /// Replaces the point at `corner`.
    pub fn set(&mut self, corner: Corner, point: Point3) {
        match corner {
            Corner::Start => self.start = point,
            Corner::Vertex => self.vertex = point,
            Corner::End => self.end = point,
        }
    }

    /// Returns the triple with its two ray endpoints swapped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.vertex, self.start)
    }

    /// Unit direction from the vertex toward `A`, `None` if `A == B`.
    #[must_use]
    pub fn start_direction(&self) -> Option<Vector3> {
        unit_direction(&self.vertex, &self.start)
    }

    /// Unit direction from the vertex toward `C`, `None` if `C == B`.
    #[must_use]
    pub fn end_direction(&self) -> Option<Vector3> {
        unit_direction(&self.vertex, &self.end)
    }
}
