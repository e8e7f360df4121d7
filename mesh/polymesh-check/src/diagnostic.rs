//! Diagnostics produced by the checks and the sinks that receive them.

use std::fmt;

use polymesh_types::CellRef;
use tracing::{error, info};

/// Identifies one check of the validator suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    /// Every face boundary touches as many distinct vertices as it has edges.
    ClosedPolygons,
    /// Every edge id named by a face exists.
    EdgeReferences,
    /// Every vertex id named by an edge or a face exists.
    VertexReferences,
    /// Listing of 0D and 1D markers for manual inspection. Never fails.
    Markers,
    /// No edge has zero length.
    EdgeLengths,
    /// No face has zero area.
    PolygonAreas,
}

impl CheckKind {
    /// All checks, in the order the suite runs them.
    pub const ALL: [Self; 6] = [
        Self::ClosedPolygons,
        Self::EdgeReferences,
        Self::VertexReferences,
        Self::Markers,
        Self::EdgeLengths,
        Self::PolygonAreas,
    ];

    /// Short, stable name of the check.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ClosedPolygons => "closed-polygons",
            Self::EdgeReferences => "edge-references",
            Self::VertexReferences => "vertex-references",
            Self::Markers => "markers",
            Self::EdgeLengths => "edge-lengths",
            Self::PolygonAreas => "polygon-areas",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// Informational output; does not affect the outcome.
    Info,
    /// A defect; the emitting check fails.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Info => "info",
            Self::Error => "error",
        })
    }
}

/// One finding of a check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Check that produced this diagnostic.
    pub check: CheckKind,
    /// Severity.
    pub severity: Severity,
    /// Offending cell, if the diagnostic is about one.
    pub cell: Option<CellRef>,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// An error about `cell`.
    #[must_use]
    pub fn error(check: CheckKind, cell: CellRef, message: impl Into<String>) -> Self {
        Self {
            check,
            severity: Severity::Error,
            cell: Some(cell),
            message: message.into(),
        }
    }

    /// An informational message not tied to a cell.
    #[must_use]
    pub fn info(check: CheckKind, message: impl Into<String>) -> Self {
        Self {
            check,
            severity: Severity::Info,
            cell: None,
            message: message.into(),
        }
    }

    /// Whether this diagnostic is an error.
    #[inline]
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.check, self.severity, self.message)
    }
}

/// Receiver for the diagnostics emitted while checks run.
///
/// The checks never print; they hand every diagnostic to a sink. Use
/// [`TracingSink`] to route them to the application's logs or
/// [`CollectingSink`] to keep them in memory.
pub trait DiagnosticSink {
    /// Receive one diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        (**self).emit(diagnostic);
    }
}

/// Sink that forwards diagnostics to `tracing`.
///
/// Errors are logged at `ERROR`, everything else at `INFO`, with the check
/// name and offending cell as structured fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, d: &Diagnostic) {
        let check = d.check.name();
        match (d.severity, d.cell) {
            (Severity::Error, Some(cell)) => {
                error!(check, level = %cell.level, cell_id = cell.id, "{}", d.message);
            }
            (Severity::Error, None) => error!(check, "{}", d.message),
            (Severity::Info, Some(cell)) => {
                info!(check, level = %cell.level, cell_id = cell.id, "{}", d.message);
            }
            (Severity::Info, None) => info!(check, "{}", d.message),
        }
    }
}

/// Sink that stores every diagnostic it receives.
///
/// # Example
///
/// ```
/// use polymesh_check::{CheckKind, CollectingSink, Diagnostic, DiagnosticSink};
///
/// let mut sink = CollectingSink::new();
/// sink.emit(&Diagnostic::info(CheckKind::Markers, "0D cell markers: none"));
/// assert_eq!(sink.len(), 1);
/// assert_eq!(sink.errors().count(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    diagnostics: Vec<Diagnostic>,
}

impl CollectingSink {
    /// Create an empty sink.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    /// Everything received so far, in order.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Error diagnostics received so far.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    /// Messages received so far, in order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.diagnostics.iter().map(|d| d.message.as_str())
    }

    /// Number of diagnostics received.
    #[must_use]
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Whether nothing has been received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Take the collected diagnostics.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.diagnostics.push(diagnostic.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polymesh_types::CellLevel;

    #[test]
    fn diagnostic_display() {
        let d = Diagnostic::error(
            CheckKind::EdgeLengths,
            CellRef::new(CellLevel::Cell1D, 4),
            "1D cell (Id: 4) has zero length",
        );
        assert_eq!(
            d.to_string(),
            "[edge-lengths] error: 1D cell (Id: 4) has zero length"
        );
        assert!(d.is_error());
    }

    #[test]
    fn collecting_sink_keeps_order() {
        let mut sink = CollectingSink::new();
        sink.emit(&Diagnostic::info(CheckKind::Markers, "first"));
        sink.emit(&Diagnostic::error(
            CheckKind::ClosedPolygons,
            CellRef::new(CellLevel::Cell2D, 0),
            "second",
        ));

        assert_eq!(sink.messages().collect::<Vec<_>>(), vec!["first", "second"]);
        assert_eq!(sink.errors().count(), 1);
    }

    #[test]
    fn sink_by_mutable_reference() {
        fn emit_twice(mut sink: impl DiagnosticSink) {
            sink.emit(&Diagnostic::info(CheckKind::Markers, "a"));
            sink.emit(&Diagnostic::info(CheckKind::Markers, "b"));
        }

        let mut sink = CollectingSink::new();
        emit_twice(&mut sink);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn tracing_sink_accepts_all_shapes() {
        let mut sink = TracingSink;
        sink.emit(&Diagnostic::info(CheckKind::Markers, "info"));
        sink.emit(&Diagnostic::error(
            CheckKind::PolygonAreas,
            CellRef::new(CellLevel::Cell2D, 1),
            "error",
        ));
    }

    #[test]
    fn check_names_are_unique() {
        let mut names: Vec<_> = CheckKind::ALL.iter().map(|c| c.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CheckKind::ALL.len());
    }
}
