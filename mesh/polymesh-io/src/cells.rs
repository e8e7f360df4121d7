//! Per-level cell table importers.
//!
//! Each importer reads one table and appends its cells to a mesh:
//!
//! | Table   | Row format                                         |
//! |---------|----------------------------------------------------|
//! | Cell0Ds | `id, marker, x, y`                                 |
//! | Cell1Ds | `id, marker, origin, end`                          |
//! | Cell2Ds | `id, marker, nv, v_1 .. v_nv, ne, e_1 .. e_ne`     |
//!
//! A table is parsed completely before anything is appended, so a malformed
//! row leaves the mesh exactly as it was before the call.

use std::path::Path;

use polymesh_types::{Point2, PolygonalMesh};
use tracing::{debug, info};

use crate::error::{IoError, IoResult};
use crate::params::ImportParams;
use crate::table::{FieldCursor, TableReader};

struct VertexRow {
    id: u32,
    marker: u32,
    position: Point2<f64>,
}

struct EdgeRow {
    id: u32,
    marker: u32,
    origin: u32,
    end: u32,
}

struct FaceRow {
    id: u32,
    marker: u32,
    vertices: Vec<u32>,
    edges: Vec<u32>,
}

fn parse_vertex(cursor: &mut FieldCursor<'_>) -> Result<VertexRow, String> {
    let id = cursor.next_u32("id")?;
    let marker = cursor.next_u32("marker")?;
    let x = cursor.next_f64("x")?;
    let y = cursor.next_f64("y")?;
    Ok(VertexRow {
        id,
        marker,
        position: Point2::new(x, y),
    })
}

fn parse_edge(cursor: &mut FieldCursor<'_>) -> Result<EdgeRow, String> {
    Ok(EdgeRow {
        id: cursor.next_u32("id")?,
        marker: cursor.next_u32("marker")?,
        origin: cursor.next_u32("origin")?,
        end: cursor.next_u32("end")?,
    })
}

fn parse_face(cursor: &mut FieldCursor<'_>) -> Result<FaceRow, String> {
    let id = cursor.next_u32("id")?;
    let marker = cursor.next_u32("marker")?;

    let vertex_count = cursor.next_usize("vertex count")?;
    let vertices = cursor.next_ids(vertex_count, "vertex id")?;

    let edge_count = cursor.next_usize("edge count")?;
    let edges = cursor.next_ids(edge_count, "edge id")?;

    Ok(FaceRow {
        id,
        marker,
        vertices,
        edges,
    })
}

/// Read every row of the table at `path` with `parse`.
///
/// Every field of a row must be consumed; leftovers are a parse error.
fn read_table<T>(
    path: &Path,
    params: &ImportParams,
    parse: impl Fn(&mut FieldCursor<'_>) -> Result<T, String>,
) -> IoResult<Vec<T>> {
    let reader = TableReader::open(path, params)?;
    let path = reader.path().to_path_buf();
    let mut parsed = Vec::new();

    for row in reader {
        let row = row?;
        let mut cursor = row.cursor();
        let value = parse(&mut cursor)
            .and_then(|value| cursor.finish().map(|()| value))
            .map_err(|message| IoError::parse(&path, row.line(), message))?;
        parsed.push(value);
    }

    Ok(parsed)
}

/// Import the vertex table at `path` into `mesh`.
///
/// Rows are `id, marker, x, y`. Non-zero markers are recorded in the
/// mesh's 0D marker map.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, or if any row is
/// malformed. On error nothing is appended.
///
/// # Example
///
/// ```no_run
/// use polymesh_io::{import_cell0ds, ImportParams};
/// use polymesh_types::PolygonalMesh;
///
/// let mut mesh = PolygonalMesh::new();
/// import_cell0ds("mesh/Cell0Ds.csv", &mut mesh, &ImportParams::default()).unwrap();
/// println!("{} vertices", mesh.vertex_count());
/// ```
pub fn import_cell0ds<P: AsRef<Path>>(
    path: P,
    mesh: &mut PolygonalMesh,
    params: &ImportParams,
) -> IoResult<usize> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Importing 0D cells");

    let rows = read_table(path, params, parse_vertex)?;
    let imported = rows.len();
    for row in rows {
        mesh.push_vertex(row.id, row.marker, row.position);
    }

    info!(
        imported,
        total = mesh.vertex_count(),
        markers = mesh.vertices().markers().len(),
        "Imported 0D cells"
    );
    Ok(imported)
}

/// Import the edge table at `path` into `mesh`.
///
/// Rows are `id, marker, origin, end`, where `origin` and `end` are vertex
/// ids. The ids are stored as given; they are not resolved here.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, or if any row is
/// malformed. On error nothing is appended.
pub fn import_cell1ds<P: AsRef<Path>>(
    path: P,
    mesh: &mut PolygonalMesh,
    params: &ImportParams,
) -> IoResult<usize> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Importing 1D cells");

    let rows = read_table(path, params, parse_edge)?;
    let imported = rows.len();
    for row in rows {
        mesh.push_edge(row.id, row.marker, row.origin, row.end);
    }

    info!(
        imported,
        total = mesh.edge_count(),
        markers = mesh.edges().markers().len(),
        "Imported 1D cells"
    );
    Ok(imported)
}

/// Import the face table at `path` into `mesh`.
///
/// Rows are `id, marker, nv, v_1 .. v_nv, ne, e_1 .. e_ne`. The two counts
/// are read inline and decide how many ids follow them. They are not
/// required to match each other here; the validators judge the result.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, or if any row is
/// malformed (including a count larger than the fields that follow it). On
/// error nothing is appended.
pub fn import_cell2ds<P: AsRef<Path>>(
    path: P,
    mesh: &mut PolygonalMesh,
    params: &ImportParams,
) -> IoResult<usize> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Importing 2D cells");

    let rows = read_table(path, params, parse_face)?;
    let imported = rows.len();
    for row in rows {
        mesh.push_face(row.id, row.marker, row.vertices, row.edges);
    }

    info!(
        imported,
        total = mesh.face_count(),
        markers = mesh.faces().markers().len(),
        "Imported 2D cells"
    );
    Ok(imported)
}
