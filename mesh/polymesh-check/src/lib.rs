//! Validation of planar polygonal meshes.
//!
//! This crate provides the validator suite run after import:
//! - Closed face boundaries
//! - Edge references of faces
//! - Vertex references of edges and faces
//! - Marker listing for manual inspection
//! - Degenerate (zero-length) edges
//! - Degenerate (zero-area) faces
//!
//! Checks never stop at the first defect and never stop each other; every
//! finding goes to a [`DiagnosticSink`] and into the [`ValidationReport`].
//!
//! # Example
//!
//! ```
//! use polymesh_types::{PolygonalMesh, Point2};
//! use polymesh_check::{validate_mesh, CheckKind};
//!
//! let mut mesh = PolygonalMesh::new();
//! mesh.push_vertex(0, 0, Point2::new(0.0, 0.0));
//! mesh.push_vertex(1, 0, Point2::new(0.0, 0.0));
//! mesh.push_edge(0, 0, 0, 1);
//!
//! let report = validate_mesh(&mesh);
//! assert!(!report.passed(CheckKind::EdgeLengths));
//! println!("{report}");
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod checks;
mod diagnostic;
mod report;
mod validate;

pub use checks::{
    check_closed_polygons, check_edge_lengths, check_edge_references, check_polygon_areas,
    check_vertex_references, report_markers,
};
pub use diagnostic::{
    CheckKind, CollectingSink, Diagnostic, DiagnosticSink, Severity, TracingSink,
};
pub use report::{CheckOutcome, ValidationReport};
pub use validate::{ValidationOptions, run_checks, validate_mesh};
