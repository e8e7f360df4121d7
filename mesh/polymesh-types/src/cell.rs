//! Vertex, edge and face cells.

use std::fmt;

use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Cell;

/// Topological dimension of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellLevel {
    /// 0D cells (vertices).
    Cell0D,
    /// 1D cells (edges).
    Cell1D,
    /// 2D cells (polygonal faces).
    Cell2D,
}

impl CellLevel {
    /// All levels, in import order.
    pub const ALL: [Self; 3] = [Self::Cell0D, Self::Cell1D, Self::Cell2D];

    /// Topological dimension (0, 1 or 2).
    #[inline]
    #[must_use]
    pub const fn dimension(self) -> u8 {
        match self {
            Self::Cell0D => 0,
            Self::Cell1D => 1,
            Self::Cell2D => 2,
        }
    }
}

impl fmt::Display for CellLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D cell", self.dimension())
    }
}

/// A reference to a cell by level and stored id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellRef {
    /// Level the id belongs to.
    pub level: CellLevel,
    /// Stored id of the cell.
    pub id: u32,
}

impl CellRef {
    /// Create a reference to a cell.
    #[inline]
    #[must_use]
    pub const fn new(level: CellLevel, id: u32) -> Self {
        Self { level, id }
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Id: {})", self.level, self.id)
    }
}

/// A 0D cell: a point in the plane.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// Stored id.
    pub id: u32,
    /// Position in the plane.
    pub position: Point2<f64>,
}

impl Vertex {
    /// Create a vertex.
    #[inline]
    #[must_use]
    pub const fn new(id: u32, position: Point2<f64>) -> Self {
        Self { id, position }
    }

    /// Create a vertex from raw coordinates.
    ///
    /// # Example
    ///
    /// ```
    /// use polymesh_types::Vertex;
    ///
    /// let v = Vertex::from_coords(3, 1.0, 2.0);
    /// assert_eq!(v.id, 3);
    /// assert!((v.position.y - 2.0).abs() < 1e-12);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_coords(id: u32, x: f64, y: f64) -> Self {
        Self::new(id, Point2::new(x, y))
    }
}

impl Cell for Vertex {
    const LEVEL: CellLevel = CellLevel::Cell0D;

    fn id(&self) -> u32 {
        self.id
    }
}

/// A 1D cell: a segment between two vertices, referenced by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    /// Stored id.
    pub id: u32,
    /// Id of the origin vertex.
    pub origin: u32,
    /// Id of the end vertex.
    pub end: u32,
}

impl Edge {
    /// Create an edge from `origin` to `end`.
    #[inline]
    #[must_use]
    pub const fn new(id: u32, origin: u32, end: u32) -> Self {
        Self { id, origin, end }
    }

    /// Endpoint vertex ids as `[origin, end]`.
    #[inline]
    #[must_use]
    pub const fn endpoints(&self) -> [u32; 2] {
        [self.origin, self.end]
    }
}

impl Cell for Edge {
    const LEVEL: CellLevel = CellLevel::Cell1D;

    fn id(&self) -> u32 {
        self.id
    }
}

/// A 2D cell: a polygon described by its boundary.
///
/// `vertices` lists the boundary vertex ids in order and `edges` lists one
/// edge id per boundary segment. A well-formed face has at least three
/// vertices and as many edges as vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Face {
    /// Stored id.
    pub id: u32,
    /// Boundary vertex ids, in boundary order.
    pub vertices: Vec<u32>,
    /// Boundary edge ids, one per segment.
    pub edges: Vec<u32>,
}

impl Face {
    /// Create a face.
    #[inline]
    #[must_use]
    pub const fn new(id: u32, vertices: Vec<u32>, edges: Vec<u32>) -> Self {
        Self {
            id,
            vertices,
            edges,
        }
    }

    /// Number of boundary vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of boundary edges.
    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl Cell for Face {
    const LEVEL: CellLevel = CellLevel::Cell2D;

    fn id(&self) -> u32 {
        self.id
    }
}
