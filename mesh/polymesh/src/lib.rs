//! Import and validation of planar polygonal meshes.
//!
//! This umbrella crate re-exports the polymesh-* crates and ties them
//! together in [`import_mesh`]: read the three cell tables of a mesh
//! directory, then run the validator suite over the result.
//!
//! # Quick Start
//!
//! ```no_run
//! use polymesh::prelude::*;
//!
//! let mesh = polymesh::import_mesh("data/square").unwrap();
//! println!("{} faces", mesh.face_count());
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Cells, marker maps, the mesh model and the geometry kernel
//! - [`io`] - Tabular import of the `Cell0Ds`/`Cell1Ds`/`Cell2Ds` tables
//! - [`check`] - Validator suite and diagnostics
//!
//! # Feature Flags
//!
//! - `serde` - Serialize and deserialize cells and marker maps

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

// =============================================================================
// Re-exports
// =============================================================================

/// Cells, marker maps, the mesh model and the geometry kernel.
pub use polymesh_types as types;

/// Tabular import of cell tables.
pub use polymesh_io as io;

/// Validator suite and diagnostics.
pub use polymesh_check as check;

use polymesh_check::{DiagnosticSink, TracingSink, ValidationOptions, ValidationReport};
use polymesh_io::{ImportParams, IoError};
use polymesh_types::{CellLevel, PolygonalMesh};

// =============================================================================
// Composite Import
// =============================================================================

/// Result type for composite mesh import.
pub type ImportResult<T> = Result<T, ImportError>;

/// Errors from [`import_mesh`] and [`import_mesh_with`].
#[derive(Debug, Error)]
pub enum ImportError {
    /// A cell table could not be imported.
    #[error("failed to import {level} table")]
    Stage {
        /// Level whose table failed.
        level: CellLevel,
        /// Underlying import error.
        #[source]
        source: IoError,
    },

    /// The mesh was imported but failed validation.
    #[error("mesh failed validation ({} error(s))", .0.error_count())]
    Validation(ValidationReport),
}

impl ImportError {
    /// Level of the failed stage, if a table failed to import.
    #[must_use]
    pub const fn level(&self) -> Option<CellLevel> {
        match self {
            Self::Stage { level, .. } => Some(*level),
            Self::Validation(_) => None,
        }
    }

    /// Validation report, if the mesh failed validation.
    #[must_use]
    pub const fn report(&self) -> Option<&ValidationReport> {
        match self {
            Self::Stage { .. } => None,
            Self::Validation(report) => Some(report),
        }
    }
}

/// Import and validate the mesh stored in directory `dir`.
///
/// Uses default file names, default validation options and logs every
/// diagnostic through `tracing`.
///
/// # Errors
///
/// See [`import_mesh_with`].
pub fn import_mesh<P: AsRef<Path>>(dir: P) -> ImportResult<PolygonalMesh> {
    import_mesh_with(
        dir,
        &ImportParams::default(),
        &ValidationOptions::default(),
        &mut TracingSink,
    )
}

/// Import and validate the mesh stored in directory `dir`.
///
/// The vertex, edge and face tables are imported in that order and the first
/// failure stops the import. Only a fully imported mesh is validated; all
/// checks run and their diagnostics go to `sink`.
///
/// # Errors
///
/// Returns [`ImportError::Stage`] naming the first table that could not be
/// imported, or [`ImportError::Validation`] if any check failed.
pub fn import_mesh_with<P: AsRef<Path>>(
    dir: P,
    params: &ImportParams,
    options: &ValidationOptions,
    sink: &mut dyn DiagnosticSink,
) -> ImportResult<PolygonalMesh> {
    let dir = dir.as_ref();
    info!("Importing polygonal mesh from {}", dir.display());

    let mut mesh = PolygonalMesh::new();
    for level in CellLevel::ALL {
        polymesh_io::import_level(dir, level, &mut mesh, params).map_err(|source| {
            warn!(%level, error = %source, "Mesh import stopped");
            ImportError::Stage { level, source }
        })?;
    }

    let report = polymesh_check::run_checks(&mesh, options, sink);
    if !report.is_valid() {
        return Err(ImportError::Validation(report));
    }

    info!(
        vertices = mesh.vertex_count(),
        edges = mesh.edge_count(),
        faces = mesh.face_count(),
        "Mesh imported"
    );
    Ok(mesh)
}

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for mesh import and validation.
///
/// # Usage
///
/// ```
/// use polymesh::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use polymesh_types::{
        CellLevel, CellRef, Edge, Face, MarkerMap, Point2, PolygonalMesh, Vertex, polygon_area,
    };

    // Import
    pub use polymesh_io::{ImportParams, IoError};

    // Validation
    pub use polymesh_check::{
        CheckKind, CollectingSink, DiagnosticSink, ValidationOptions, ValidationReport,
        validate_mesh,
    };

    pub use crate::{ImportError, import_mesh, import_mesh_with};
}

// =============================================================================
// Tests
// =============================================================================
