//! Validator suite driver.
//!
//! Runs every check over a populated mesh and aggregates the outcomes.

use polymesh_types::PolygonalMesh;
use tracing::{debug, info, warn};

use crate::diagnostic::{CheckKind, DiagnosticSink, TracingSink};
use crate::report::ValidationReport;

/// Options for mesh validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationOptions {
    /// Edges this long or shorter are degenerate. Default `0.0`.
    pub min_edge_length: f64,
    /// Faces with this area or less are degenerate. Default `0.0`.
    pub min_polygon_area: f64,
    /// Whether to list 0D and 1D markers to the sink.
    pub report_markers: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            min_edge_length: 0.0,
            min_polygon_area: 0.0,
            report_markers: true,
        }
    }
}

impl ValidationOptions {
    /// Treat edges of length `min_edge_length` or less as degenerate.
    #[must_use]
    pub const fn with_min_edge_length(mut self, min_edge_length: f64) -> Self {
        self.min_edge_length = min_edge_length;
        self
    }

    /// Treat faces of area `min_polygon_area` or less as degenerate.
    #[must_use]
    pub const fn with_min_polygon_area(mut self, min_polygon_area: f64) -> Self {
        self.min_polygon_area = min_polygon_area;
        self
    }

    /// Enable or disable the marker listing.
    #[must_use]
    pub const fn with_marker_report(mut self, report_markers: bool) -> Self {
        self.report_markers = report_markers;
        self
    }
}

/// Run every check over `mesh`, sending diagnostics to `sink`.
///
/// All checks run even when an earlier one fails. The report is valid only
/// if every check passed.
///
/// # Example
///
/// ```
/// use polymesh_check::{run_checks, CollectingSink, ValidationOptions};
/// use polymesh_types::{PolygonalMesh, Point2};
///
/// let mut mesh = PolygonalMesh::new();
/// mesh.push_vertex(0, 0, Point2::new(0.0, 0.0));
/// mesh.push_vertex(1, 0, Point2::new(1.0, 0.0));
/// mesh.push_vertex(2, 0, Point2::new(0.0, 1.0));
/// mesh.push_edge(0, 0, 0, 1);
/// mesh.push_edge(1, 0, 1, 2);
/// mesh.push_edge(2, 0, 2, 0);
/// mesh.push_face(0, 0, vec![0, 1, 2], vec![0, 1, 2]);
///
/// let mut sink = CollectingSink::new();
/// let report = run_checks(&mesh, &ValidationOptions::default(), &mut sink);
/// assert!(report.is_valid());
/// assert_eq!(sink.errors().count(), 0);
/// ```
pub fn run_checks(
    mesh: &PolygonalMesh,
    options: &ValidationOptions,
    sink: &mut dyn DiagnosticSink,
) -> ValidationReport {
    info!(
        "Validating polygonal mesh ({} vertices, {} edges, {} faces)",
        mesh.vertex_count(),
        mesh.edge_count(),
        mesh.face_count()
    );

    let outcomes = CheckKind::ALL
        .iter()
        .map(|check| {
            let outcome = check.run(mesh, options, sink);
            debug!(check = check.name(), passed = outcome.passed, "Check finished");
            outcome
        })
        .collect();

    let report = ValidationReport {
        vertex_count: mesh.vertex_count(),
        edge_count: mesh.edge_count(),
        face_count: mesh.face_count(),
        outcomes,
    };

    if report.is_valid() {
        info!("Mesh validation passed");
    } else {
        warn!(
            "Mesh validation failed: {} check(s), {} error(s)",
            report.failed_checks().count(),
            report.error_count()
        );
    }
    debug!("{}", report);

    report
}

/// Validate a mesh with default options, logging diagnostics via `tracing`.
#[must_use]
pub fn validate_mesh(mesh: &PolygonalMesh) -> ValidationReport {
    run_checks(mesh, &ValidationOptions::default(), &mut TracingSink)
}
