//! Tabular import of planar polygonal meshes.
//!
//! A mesh is stored as three co-located text tables, one per cell level:
//!
//! - **Cell0Ds** - vertices: `id, marker, x, y`
//! - **Cell1Ds** - edges: `id, marker, origin, end`
//! - **Cell2Ds** - faces: `id, marker, nv, v_1 .. v_nv, ne, e_1 .. e_ne`
//!
//! Each table starts with a header line. Fields are separated by any
//! character that cannot be part of a number unless a fixed delimiter is set
//! in [`ImportParams`].
//!
//! The importers here only parse and append. Cross-references between levels
//! are checked by `polymesh-check`; the `polymesh` crate ties both together.
//!
//! # Example
//!
//! ```no_run
//! use polymesh_io::{import_cell0ds, import_cell1ds, import_cell2ds, ImportParams};
//! use polymesh_types::{CellLevel, PolygonalMesh};
//!
//! let params = ImportParams::default();
//! let mut mesh = PolygonalMesh::new();
//!
//! import_cell0ds(params.path_for("mesh", CellLevel::Cell0D), &mut mesh, &params).unwrap();
//! import_cell1ds(params.path_for("mesh", CellLevel::Cell1D), &mut mesh, &params).unwrap();
//! import_cell2ds(params.path_for("mesh", CellLevel::Cell2D), &mut mesh, &params).unwrap();
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod cells;
mod error;
mod params;
mod table;

pub use cells::{import_cell0ds, import_cell1ds, import_cell2ds};
pub use error::{IoError, IoResult};
pub use params::ImportParams;
pub use table::{FieldCursor, Row, TableReader};

use std::path::Path;

use polymesh_types::{CellLevel, PolygonalMesh};

/// Import the table for `level` from mesh directory `dir` into `mesh`.
///
/// The file name comes from `params`. Returns the number of cells appended.
///
/// # Errors
///
/// Returns an error if the table cannot be opened or read, or if any row is
/// malformed.
pub fn import_level<P: AsRef<Path>>(
    dir: P,
    level: CellLevel,
    mesh: &mut PolygonalMesh,
    params: &ImportParams,
) -> IoResult<usize> {
    let path = params.path_for(dir, level);
    match level {
        CellLevel::Cell0D => import_cell0ds(path, mesh, params),
        CellLevel::Cell1D => import_cell1ds(path, mesh, params),
        CellLevel::Cell2D => import_cell2ds(path, mesh, params),
    }
}
