//! Composite import of mesh directories.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::Path;

use polymesh::check::{CheckKind, CollectingSink, ValidationOptions};
use polymesh::io::{ImportParams, IoError};
use polymesh::types::{CellLevel, CellRef, Point2};
use polymesh::{ImportError, import_mesh, import_mesh_with};
use tempfile::{TempDir, tempdir};

// =============================================================================
// Fixtures
// =============================================================================

const TRIANGLE_CELL0DS: &str = "Id;Marker;X;Y\n0;1;0.0;0.0\n1;1;1.0;0.0\n2;0;0.0;1.0\n";
const TRIANGLE_CELL1DS: &str = "Id;Marker;Origin;End\n0;2;0;1\n1;0;1;2\n2;2;2;0\n";
const TRIANGLE_CELL2DS: &str =
    "Id;Marker;NumVertices;Vertices;NumEdges;Edges\n0;0;3;0;1;2;3;0;1;2\n";

fn write_tables(dir: &Path, cell0ds: &str, cell1ds: &str, cell2ds: &str) {
    fs::write(dir.join("Cell0Ds.csv"), cell0ds).unwrap();
    fs::write(dir.join("Cell1Ds.csv"), cell1ds).unwrap();
    fs::write(dir.join("Cell2Ds.csv"), cell2ds).unwrap();
}

fn triangle_dir() -> TempDir {
    let dir = tempdir().unwrap();
    write_tables(dir.path(), TRIANGLE_CELL0DS, TRIANGLE_CELL1DS, TRIANGLE_CELL2DS);
    dir
}

// =============================================================================
// Successful Import
// =============================================================================

#[test]
fn single_triangle_imports_and_validates() {
    let dir = triangle_dir();
    let mut sink = CollectingSink::new();
    let mesh = import_mesh_with(
        dir.path(),
        &ImportParams::default(),
        &ValidationOptions::default(),
        &mut sink,
    )
    .unwrap();

    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.edge_count(), 3);
    assert_eq!(mesh.face_count(), 1);
    assert_eq!(mesh.vertex_position(1), Some(Point2::new(1.0, 0.0)));
    assert_eq!(mesh.markers(CellLevel::Cell1D).cells(2), &[0, 2]);
    assert_eq!(sink.errors().count(), 0);
    assert!(sink.messages().any(|m| m == "Marker: 2 Id: 0 2"));
}

#[test]
fn import_mesh_uses_defaults() {
    let dir = triangle_dir();
    let mesh = import_mesh(dir.path()).unwrap();
    assert_eq!(mesh.faces().ids().collect::<Vec<_>>(), vec![0]);
}

#[test]
fn vertex_table_markers() {
    let dir = tempdir().unwrap();
    write_tables(
        dir.path(),
        "Id;Marker;X;Y\n0;0;0;0\n1;5;1;0\n",
        "Id;Marker;Origin;End\n",
        "Id;Marker;NumVertices;Vertices;NumEdges;Edges\n",
    );

    let mesh = import_mesh(dir.path()).unwrap();
    assert_eq!(mesh.vertex_count(), 2);
    let markers: Vec<_> = mesh.markers(CellLevel::Cell0D).iter().collect();
    assert_eq!(markers, vec![(5, &[1][..])]);
}

#[test]
fn custom_file_names_and_delimiter() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("v.txt"), TRIANGLE_CELL0DS.replace(';', ",")).unwrap();
    fs::write(dir.path().join("e.txt"), TRIANGLE_CELL1DS.replace(';', ",")).unwrap();
    fs::write(dir.path().join("f.txt"), TRIANGLE_CELL2DS.replace(';', ",")).unwrap();

    let params = ImportParams::default()
        .with_delimiter(',')
        .with_file_name(CellLevel::Cell0D, "v.txt")
        .with_file_name(CellLevel::Cell1D, "e.txt")
        .with_file_name(CellLevel::Cell2D, "f.txt");
    let mesh = import_mesh_with(
        dir.path(),
        &params,
        &ValidationOptions::default(),
        &mut CollectingSink::new(),
    )
    .unwrap();

    assert_eq!(mesh.face_count(), 1);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn missing_edge_table_names_the_stage() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("Cell0Ds.csv"), TRIANGLE_CELL0DS).unwrap();
    fs::write(dir.path().join("Cell2Ds.csv"), TRIANGLE_CELL2DS).unwrap();

    let err = import_mesh(dir.path()).unwrap_err();
    assert_eq!(err.level(), Some(CellLevel::Cell1D));
    assert!(matches!(
        err,
        ImportError::Stage {
            level: CellLevel::Cell1D,
            source: IoError::FileNotFound { .. },
        }
    ));
}

#[test]
fn malformed_face_row_fails_face_stage() {
    let dir = tempdir().unwrap();
    write_tables(
        dir.path(),
        TRIANGLE_CELL0DS,
        TRIANGLE_CELL1DS,
        "Id;Marker;NumVertices;Vertices;NumEdges;Edges\n0;0;3;0;1;2;3;0;1\n",
    );

    let err = import_mesh(dir.path()).unwrap_err();
    match err {
        ImportError::Stage { level, source } => {
            assert_eq!(level, CellLevel::Cell2D);
            assert!(source.is_parse());
        }
        ImportError::Validation(report) => panic!("unexpected validation failure:\n{report}"),
    }
}

#[test]
fn zero_length_edge_fails_validation() {
    let dir = tempdir().unwrap();
    write_tables(
        dir.path(),
        "Id;Marker;X;Y\n0;0;0.0;0.0\n1;0;1.0;0.0\n2;0;0.0;1.0\n3;0;1.0;0.0\n",
        "Id;Marker;Origin;End\n0;0;0;1\n1;0;1;2\n2;0;2;0\n3;0;1;3\n",
        TRIANGLE_CELL2DS,
    );

    let mut sink = CollectingSink::new();
    let err = import_mesh_with(
        dir.path(),
        &ImportParams::default(),
        &ValidationOptions::default(),
        &mut sink,
    )
    .unwrap_err();

    let report = err.report().expect("expected a validation failure");
    assert_eq!(
        report.failed_checks().collect::<Vec<_>>(),
        vec![CheckKind::EdgeLengths]
    );
    assert_eq!(report.outcomes.len(), CheckKind::ALL.len());
    assert_eq!(
        report.errors().filter_map(|d| d.cell).collect::<Vec<_>>(),
        vec![CellRef::new(CellLevel::Cell1D, 3)]
    );
    assert_eq!(sink.errors().count(), 1);
}

#[test]
fn dangling_edge_reference_fails_validation() {
    let dir = tempdir().unwrap();
    write_tables(
        dir.path(),
        TRIANGLE_CELL0DS,
        "Id;Marker;Origin;End\n0;0;0;1\n1;0;1;2\n2;0;2;7\n",
        TRIANGLE_CELL2DS,
    );

    let err = import_mesh(dir.path()).unwrap_err();
    let report = err.report().expect("expected a validation failure");

    assert!(!report.passed(CheckKind::VertexReferences));
    assert!(report.passed(CheckKind::EdgeReferences));
    assert!(report.outcome(CheckKind::ClosedPolygons).is_some());
    assert!(report.outcome(CheckKind::PolygonAreas).is_some());
}
