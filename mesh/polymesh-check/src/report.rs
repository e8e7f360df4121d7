//! Per-check outcomes and the aggregated validation report.

use std::fmt;

use polymesh_types::CellRef;

use crate::diagnostic::{CheckKind, Diagnostic};

/// Result of running a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Which check ran.
    pub check: CheckKind,
    /// Whether the check passed.
    pub passed: bool,
    /// Everything the check emitted, in order.
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckOutcome {
    /// Error diagnostics of this check.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    /// Cells reported as defective, in report order.
    pub fn offending_cells(&self) -> impl Iterator<Item = CellRef> {
        self.errors().filter_map(|d| d.cell)
    }

    /// Number of error diagnostics.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }
}

/// Aggregated result of the validator suite.
///
/// The mesh is valid when every check passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Number of vertices checked.
    pub vertex_count: usize,
    /// Number of edges checked.
    pub edge_count: usize,
    /// Number of faces checked.
    pub face_count: usize,
    /// One outcome per check, in run order.
    pub outcomes: Vec<CheckOutcome>,
}

impl ValidationReport {
    /// Whether every check passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    /// Outcome of `check`, if it ran.
    #[must_use]
    pub fn outcome(&self, check: CheckKind) -> Option<&CheckOutcome> {
        self.outcomes.iter().find(|o| o.check == check)
    }

    /// Whether `check` ran and passed.
    #[must_use]
    pub fn passed(&self, check: CheckKind) -> bool {
        self.outcome(check).is_some_and(|o| o.passed)
    }

    /// Checks that failed, in run order.
    pub fn failed_checks(&self) -> impl Iterator<Item = CheckKind> {
        self.outcomes.iter().filter(|o| !o.passed).map(|o| o.check)
    }

    /// All error diagnostics, in run order.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.outcomes.iter().flat_map(|o| o.errors())
    }

    /// Total number of error diagnostics.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mesh Validation Report:")?;
        writeln!(f, "  0D cells: {}", self.vertex_count)?;
        writeln!(f, "  1D cells: {}", self.edge_count)?;
        writeln!(f, "  2D cells: {}", self.face_count)?;
        writeln!(f)?;
        writeln!(f, "  Checks:")?;
        for outcome in &self.outcomes {
            let errors = outcome.error_count();
            if outcome.passed {
                writeln!(f, "    {}: ok", outcome.check)?;
            } else {
                writeln!(f, "    {}: FAILED ({errors} error(s))", outcome.check)?;
            }
        }

        if !self.is_valid() {
            writeln!(f)?;
            writeln!(f, "  Errors:")?;
            for d in self.errors() {
                writeln!(f, "    - {d}")?;
            }
        }

        Ok(())
    }
}
