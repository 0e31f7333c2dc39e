//! Triangular lattice geometry in doubled coordinates.
//!
//! # Coordinate system
//!
//! Lattice *vertices* are [`GridPoint`]s `(x, y)` with `x + y` even.  One
//! logical x unit is half a triangle side, one y unit is a full triangle
//! height, so the world position of a vertex is `(x * L/2, y * L*√3/2)`.
//!
//! A *triangle* ([`TrianglePoint`]) is addressed by the midpoint of its
//! horizontal edge `(x, y)` (so `x + y` is odd) and its orientation `t`:
//! `+1` points up, `-1` points down.  Its corners are `(x-1, y)`, `(x+1, y)`
//! and `(x, y+t)`.
//!
//! Rotating by 60° about the origin vertex maps vertices with
//! `(x, y) → ((x - 3y)/2, (x + y)/2)` and flips the orientation of every
//! triangle.

use std::fmt;

// ── TrianglePoint ─────────────────────────────────────────────────────────────

/// One cell of the triangular lattice.
///
/// Validity (`x + y` odd, `t = ±1`) is the caller's responsibility; the type
/// does not enforce it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrianglePoint {
    pub x: i32,
    pub y: i32,
    pub t: i8,
}

impl TrianglePoint {
    #[inline]
    pub const fn new(x: i32, y: i32, t: i8) -> Self {
        Self { x, y, t }
    }

    /// `true` if the coordinate addresses a real lattice triangle.
    #[inline]
    pub fn is_valid(self) -> bool {
        (self.x + self.y).rem_euclid(2) == 1 && (self.t == 1 || self.t == -1)
    }

    /// The three lattice vertices of this triangle.
    pub fn corners(self) -> [GridPoint; 3] {
        [
            GridPoint::new(self.x - 1, self.y),
            GridPoint::new(self.x + 1, self.y),
            GridPoint::new(self.x, self.y + self.t as i32),
        ]
    }

    /// Rotate 60° counter-clockwise about the origin vertex.
    pub fn rotate60(self) -> Self {
        let t = self.t as i32;
        let x = (self.x - 3 * self.y - t) / 2;
        let row = (self.x + self.y).div_euclid(2);
        if t > 0 {
            Self::new(x, row + 1, -1)
        } else {
            Self::new(x, row, 1)
        }
    }

    /// Rotate by `sixths` × 60° counter-clockwise about the origin vertex.
    pub fn rotated(self, sixths: u8) -> Self {
        (0..sixths % 6).fold(self, |tri, _| tri.rotate60())
    }

    /// Translate by a vertex offset.  Parity is preserved because the offset
    /// itself has even parity.
    #[inline]
    pub fn translated(self, by: GridPoint) -> Self {
        Self::new(self.x + by.x, self.y + by.y, self.t)
    }
}

impl fmt::Display for TrianglePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.t)
    }
}

// ── GridPoint ─────────────────────────────────────────────────────────────────

/// A lattice vertex.  Units stand on vertices.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub const ORIGIN: GridPoint = GridPoint { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `true` if `x + y` is even.
    #[inline]
    pub fn is_valid(self) -> bool {
        (self.x + self.y).rem_euclid(2) == 0
    }

    /// The adjacent vertex in `dir`, or `None` for edge-aligned directions,
    /// which have no single-step neighbour.
    pub fn neighbor(self, dir: GridDirection) -> Option<GridPoint> {
        let (dx, dy) = dir.vertex_step()?;
        Some(GridPoint::new(self.x + dx, self.y + dy))
    }

    /// The vertex-aligned direction that best matches the bearing from `self`
    /// to `other`.  `None` when the points coincide.
    pub fn direction_to(self, other: GridPoint) -> Option<GridDirection> {
        let dx = (other.x - self.x) as f64 * 0.5;
        let dy = (other.y - self.y) as f64 * (3f64.sqrt() * 0.5);
        if dx == 0.0 && dy == 0.0 {
            return None;
        }
        let sixth = (dy.atan2(dx) / (std::f64::consts::PI / 3.0)).round() as i32;
        let index = (sixth.rem_euclid(6) * 2) as u8;
        Some(GridDirection::from_index(index))
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

// ── GridDirection ─────────────────────────────────────────────────────────────

/// Twelve facings at 30° steps, counter-clockwise from east.
///
/// Even variants point at a neighbouring vertex; odd variants point across
/// the middle of a triangle edge.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridDirection {
    #[default]
    East,
    EastNorth,
    NorthEast,
    North,
    NorthWest,
    WestNorth,
    West,
    WestSouth,
    SouthWest,
    South,
    SouthEast,
    EastSouth,
}

impl GridDirection {
    pub const ALL: [GridDirection; 12] = [
        GridDirection::East,
        GridDirection::EastNorth,
        GridDirection::NorthEast,
        GridDirection::North,
        GridDirection::NorthWest,
        GridDirection::WestNorth,
        GridDirection::West,
        GridDirection::WestSouth,
        GridDirection::SouthWest,
        GridDirection::South,
        GridDirection::SouthEast,
        GridDirection::EastSouth,
    ];

    /// Position in [`ALL`](Self::ALL); multiply by 30 for degrees.
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Inverse of [`index`](Self::index), wrapping modulo 12.
    #[inline]
    pub fn from_index(index: u8) -> Self {
        Self::ALL[(index % 12) as usize]
    }

    #[inline]
    pub fn is_vertex_aligned(self) -> bool {
        self.index() % 2 == 0
    }

    /// Number of whole 60° turns from east, discarding the 30° half step.
    #[inline]
    pub fn sixths(self) -> u8 {
        self.index() / 2
    }

    #[inline]
    pub fn degrees(self) -> f32 {
        self.index() as f32 * 30.0
    }

    pub fn opposite(self) -> Self {
        Self::from_index(self.index() + 6)
    }

    /// Doubled-coordinate offset to the next vertex for vertex-aligned
    /// directions.
    pub fn vertex_step(self) -> Option<(i32, i32)> {
        match self {
            GridDirection::East      => Some((2, 0)),
            GridDirection::NorthEast => Some((1, 1)),
            GridDirection::NorthWest => Some((-1, 1)),
            GridDirection::West      => Some((-2, 0)),
            GridDirection::SouthWest => Some((-1, -1)),
            GridDirection::SouthEast => Some((1, -1)),
            _ => None,
        }
    }
}

impl fmt::Display for GridDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
