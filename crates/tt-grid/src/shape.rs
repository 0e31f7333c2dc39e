//! Facing-aware triangle tables.
//!
//! Attack patterns and unit volumes are authored offline as lists of
//! triangles relative to the origin vertex, once for an east facing and once
//! for the 30° `EastNorth` facing.  Every other facing is reached by whole
//! 60° rotations of one of the two tables.

use tt_core::{GridDirection, GridPoint, TrianglePoint};

/// Relative triangle table for vertex-aligned (`even`) and edge-aligned
/// (`odd`) facings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    /// Cells for facing `East`.
    pub even: Vec<TrianglePoint>,
    /// Cells for facing `EastNorth`.
    pub odd:  Vec<TrianglePoint>,
}

impl Shape {
    pub fn new(even: Vec<TrianglePoint>, odd: Vec<TrianglePoint>) -> Self {
        Self { even, odd }
    }

    /// Same table for both facing parities.
    pub fn uniform(cells: Vec<TrianglePoint>) -> Self {
        Self { odd: cells.clone(), even: cells }
    }

    /// The six triangles around a vertex, the default unit volume.
    pub fn hexagon() -> Self {
        Self::uniform(vec![
            TrianglePoint::new(1, 0, 1),
            TrianglePoint::new(1, 0, -1),
            TrianglePoint::new(-1, 0, 1),
            TrianglePoint::new(-1, 0, -1),
            TrianglePoint::new(0, 1, -1),
            TrianglePoint::new(0, -1, 1),
        ])
    }

    pub fn is_empty(&self) -> bool {
        self.even.is_empty() && self.odd.is_empty()
    }

    /// Absolute cells covered when anchored at `anchor` facing `facing`.
    pub fn cells_at(&self, anchor: GridPoint, facing: GridDirection) -> Vec<TrianglePoint> {
        let table = if facing.is_vertex_aligned() { &self.even } else { &self.odd };
        let sixths = facing.sixths();
        table
            .iter()
            .map(|tri| tri.rotated(sixths).translated(anchor))
            .collect()
    }
}
