//! The six checks of the validator suite.
//!
//! Every check scans the whole mesh, reports each defective cell and keeps
//! going. A check that meets an id it cannot resolve leaves the complaint to
//! the reference checks instead of reporting it twice.

use hashbrown::HashSet;
use polymesh_types::{CellLevel, CellRef, PolygonalMesh, distance, polygon_area};
use tracing::debug;

use crate::diagnostic::{CheckKind, Diagnostic, DiagnosticSink};
use crate::report::CheckOutcome;
use crate::validate::ValidationOptions;

/// Accumulates the diagnostics of one check while forwarding them to a sink.
struct CheckRun<'s> {
    check: CheckKind,
    sink: &'s mut dyn DiagnosticSink,
    diagnostics: Vec<Diagnostic>,
    passed: bool,
}

impl<'s> CheckRun<'s> {
    fn new(check: CheckKind, sink: &'s mut dyn DiagnosticSink) -> Self {
        Self {
            check,
            sink,
            diagnostics: Vec::new(),
            passed: true,
        }
    }

    fn push(&mut self, diagnostic: Diagnostic) {
        self.sink.emit(&diagnostic);
        self.diagnostics.push(diagnostic);
    }

    fn fail(&mut self, level: CellLevel, id: u32, message: String) {
        self.passed = false;
        self.push(Diagnostic::error(
            self.check,
            CellRef::new(level, id),
            message,
        ));
    }

    fn info(&mut self, message: String) {
        self.push(Diagnostic::info(self.check, message));
    }

    fn finish(self) -> CheckOutcome {
        CheckOutcome {
            check: self.check,
            passed: self.passed,
            diagnostics: self.diagnostics,
        }
    }
}

/// Check that every face boundary is closed.
///
/// For each face, its edges are resolved to their endpoints and the
/// distinct endpoint vertices are counted. A closed boundary touches exactly
/// as many distinct vertices as it has edges; any other count means a
/// dangling or repeated vertex. Edge ids that do not resolve contribute no
/// vertices.
///
/// This compares counts only. It does not walk the boundary as a cycle, so
/// some self-touching boundaries pass.
pub fn check_closed_polygons(mesh: &PolygonalMesh, sink: &mut dyn DiagnosticSink) -> CheckOutcome {
    let mut run = CheckRun::new(CheckKind::ClosedPolygons, sink);

    for face in mesh.faces() {
        let touched: HashSet<u32> = face
            .edges
            .iter()
            .filter_map(|&id| mesh.edges().get(id))
            .flat_map(|edge| edge.endpoints())
            .collect();

        if touched.len() != face.edge_count() {
            run.fail(
                CellLevel::Cell2D,
                face.id,
                format!(
                    "2D cell (Id: {}) is not a closed polygon: {} edges touch {} distinct vertices",
                    face.id,
                    face.edge_count(),
                    touched.len()
                ),
            );
        }
    }

    run.finish()
}

/// Check that every edge id named by a face exists.
///
/// Each face is reported at most once, at its first unknown edge.
pub fn check_edge_references(mesh: &PolygonalMesh, sink: &mut dyn DiagnosticSink) -> CheckOutcome {
    let mut run = CheckRun::new(CheckKind::EdgeReferences, sink);

    for face in mesh.faces() {
        if let Some(&missing) = face.edges.iter().find(|&&id| !mesh.edges().contains(id)) {
            run.fail(
                CellLevel::Cell2D,
                face.id,
                format!(
                    "2D cell (Id: {}) has an invalid edge: 1D cell {missing} does not exist",
                    face.id
                ),
            );
        }
    }

    run.finish()
}

/// Check that every vertex id named by an edge or a face exists.
///
/// Edges are checked first, then faces. Each cell is reported at most once.
pub fn check_vertex_references(
    mesh: &PolygonalMesh,
    sink: &mut dyn DiagnosticSink,
) -> CheckOutcome {
    let mut run = CheckRun::new(CheckKind::VertexReferences, sink);
    let vertices = mesh.vertices();

    for edge in mesh.edges() {
        if let Some(missing) = edge.endpoints().into_iter().find(|&id| !vertices.contains(id)) {
            run.fail(
                CellLevel::Cell1D,
                edge.id,
                format!(
                    "origin or end of 1D cell (Id: {}) is wrong: 0D cell {missing} does not exist",
                    edge.id
                ),
            );
        }
    }

    for face in mesh.faces() {
        if let Some(&missing) = face.vertices.iter().find(|&&id| !vertices.contains(id)) {
            run.fail(
                CellLevel::Cell2D,
                face.id,
                format!(
                    "vertices of 2D cell (Id: {}) are wrong: 0D cell {missing} does not exist",
                    face.id
                ),
            );
        }
    }

    run.finish()
}

/// List the 0D and 1D markers for manual inspection.
///
/// Emits, per level, each marker in ascending order followed by the ids of
/// the cells carrying it in insertion order. This is a listing, not an
/// assertion: the outcome always passes. Nothing is emitted when `enabled`
/// is false.
pub fn report_markers(
    mesh: &PolygonalMesh,
    enabled: bool,
    sink: &mut dyn DiagnosticSink,
) -> CheckOutcome {
    let mut run = CheckRun::new(CheckKind::Markers, sink);
    if !enabled {
        return run.finish();
    }

    for level in [CellLevel::Cell0D, CellLevel::Cell1D] {
        let markers = mesh.markers(level);
        if markers.is_empty() {
            run.info(format!("{level} markers: none"));
            continue;
        }

        run.info(format!("{level} markers:"));
        for (marker, ids) in markers.iter() {
            let ids: Vec<String> = ids.iter().map(u32::to_string).collect();
            run.info(format!("Marker: {marker} Id: {}", ids.join(" ")));
        }
    }

    run.finish()
}

/// Check that no edge is degenerate.
///
/// An edge fails if the distance between its endpoints is at most
/// `min_length` (with the default of `0.0`, only coincident endpoints fail)
/// or is not a number.
/// Edges with an unknown endpoint are skipped.
pub fn check_edge_lengths(
    mesh: &PolygonalMesh,
    min_length: f64,
    sink: &mut dyn DiagnosticSink,
) -> CheckOutcome {
    let mut run = CheckRun::new(CheckKind::EdgeLengths, sink);
    let mut skipped = 0_usize;

    for edge in mesh.edges() {
        let Some([a, b]) = mesh.edge_segment(edge) else {
            skipped += 1;
            continue;
        };

        let length = distance(&a, &b);
        if length.is_nan() || length <= min_length {
            run.fail(
                CellLevel::Cell1D,
                edge.id,
                format!(
                    "edge length of 1D cell (Id: {}) is degenerate: {length} <= {min_length}",
                    edge.id
                ),
            );
        }
    }

    if skipped > 0 {
        debug!(skipped, "Skipped edges with unresolved endpoints");
    }
    if run.passed {
        run.info(format!(
            "No edge has zero length ({} checked)",
            mesh.edge_count() - skipped
        ));
    }

    run.finish()
}

/// Check that no face is degenerate.
///
/// The boundary vertices of each face are resolved in order and the
/// shoelace area is computed. A face fails if its area is at most
/// `min_area` (with the default of `0.0`, only zero-area faces fail) or if
/// it has fewer than three vertices. Faces with an unknown vertex are
/// skipped.
pub fn check_polygon_areas(
    mesh: &PolygonalMesh,
    min_area: f64,
    sink: &mut dyn DiagnosticSink,
) -> CheckOutcome {
    let mut run = CheckRun::new(CheckKind::PolygonAreas, sink);
    let mut skipped = 0_usize;

    for face in mesh.faces() {
        if face.vertex_count() < 3 {
            run.fail(
                CellLevel::Cell2D,
                face.id,
                format!(
                    "polygon area of 2D cell (Id: {}) is degenerate: only {} vertices",
                    face.id,
                    face.vertex_count()
                ),
            );
            continue;
        }

        let Some(polygon) = mesh.face_polygon(face) else {
            skipped += 1;
            continue;
        };

        let area = polygon_area(&polygon);
        if area.is_nan() || area <= min_area {
            run.fail(
                CellLevel::Cell2D,
                face.id,
                format!(
                    "polygon area of 2D cell (Id: {}) is degenerate: {area} <= {min_area}",
                    face.id
                ),
            );
        }
    }

    if skipped > 0 {
        debug!(skipped, "Skipped faces with unresolved vertices");
    }
    if run.passed {
        run.info(format!(
            "No polygon has zero area ({} checked)",
            mesh.face_count() - skipped
        ));
    }

    run.finish()
}

impl CheckKind {
    /// Run this check over `mesh`.
    pub fn run(
        self,
        mesh: &PolygonalMesh,
        options: &ValidationOptions,
        sink: &mut dyn DiagnosticSink,
    ) -> CheckOutcome {
        match self {
            Self::ClosedPolygons => check_closed_polygons(mesh, sink),
            Self::EdgeReferences => check_edge_references(mesh, sink),
            Self::VertexReferences => check_vertex_references(mesh, sink),
            Self::Markers => report_markers(mesh, options.report_markers, sink),
            Self::EdgeLengths => check_edge_lengths(mesh, options.min_edge_length, sink),
            Self::PolygonAreas => check_polygon_areas(mesh, options.min_polygon_area, sink),
        }
    }
}
