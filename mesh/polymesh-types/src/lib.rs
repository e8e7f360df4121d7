//! Core types for planar polygonal meshes.
//!
//! This crate provides the in-memory mesh model and the small geometry
//! kernel the validators need:
//!
//! - [`PolygonalMesh`] - Vertices, edges and faces with their markers
//! - [`CellTable`] - Append-only storage for one cell level with an id index
//! - [`Vertex`], [`Edge`], [`Face`] - The 0D, 1D and 2D cells
//! - [`MarkerMap`] - Cell ids grouped by non-zero marker
//! - [`distance`], [`polygon_area`] - Edge length and shoelace area
//!
//! # Layer 0 Crate
//!
//! This crate has no I/O and no validation logic. Cells refer to each other
//! by stored id; ids are not assumed to be contiguous or to match positions.
//!
//! # Example
//!
//! ```
//! use polymesh_types::{polygon_area, PolygonalMesh, Point2};
//!
//! let mut mesh = PolygonalMesh::new();
//! mesh.push_vertex(0, 0, Point2::new(0.0, 0.0));
//! mesh.push_vertex(1, 0, Point2::new(2.0, 0.0));
//! mesh.push_vertex(2, 0, Point2::new(0.0, 2.0));
//! mesh.push_face(0, 0, vec![0, 1, 2], vec![0, 1, 2]);
//!
//! let face = &mesh.faces().as_slice()[0];
//! let polygon = mesh.face_polygon(face).unwrap_or_default();
//! assert!((polygon_area(&polygon) - 2.0).abs() < 1e-12);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod cell;
mod geometry;
mod markers;
mod mesh;
mod table;
mod traits;

pub use cell::{CellLevel, CellRef, Edge, Face, Vertex};
pub use geometry::{distance, polygon_area, signed_polygon_area};
pub use markers::{MarkerMap, UNMARKED};
pub use mesh::PolygonalMesh;
pub use table::CellTable;
pub use traits::Cell;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Vector2};
