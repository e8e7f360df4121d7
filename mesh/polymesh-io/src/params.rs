//! Import configuration.

use std::path::{Path, PathBuf};

use polymesh_types::CellLevel;

/// Parameters controlling how cell tables are located and tokenized.
///
/// # Example
///
/// ```
/// use polymesh_io::ImportParams;
/// use polymesh_types::CellLevel;
///
/// let params = ImportParams::default().with_delimiter(';');
/// let path = params.path_for("meshes/square", CellLevel::Cell1D);
/// assert!(path.ends_with("Cell1Ds.csv"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportParams {
    /// File name of the vertex table inside the mesh directory.
    pub cell0d_file: String,

    /// File name of the edge table inside the mesh directory.
    pub cell1d_file: String,

    /// File name of the face table inside the mesh directory.
    pub cell2d_file: String,

    /// Number of leading lines to skip in every table.
    pub header_lines: usize,

    /// Field delimiter.
    ///
    /// `None` accepts any character that cannot be part of a number as a
    /// separator. `Some(c)` splits on exactly `c` and rejects empty fields.
    pub delimiter: Option<char>,
}

impl Default for ImportParams {
    fn default() -> Self {
        Self {
            cell0d_file: "Cell0Ds.csv".to_string(),
            cell1d_file: "Cell1Ds.csv".to_string(),
            cell2d_file: "Cell2Ds.csv".to_string(),
            header_lines: 1,
            delimiter: None,
        }
    }
}

impl ImportParams {
    /// Use a fixed field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Number of header lines to skip in every table.
    #[must_use]
    pub fn with_header_lines(mut self, header_lines: usize) -> Self {
        self.header_lines = header_lines;
        self
    }

    /// Override the file name used for `level`.
    #[must_use]
    pub fn with_file_name(mut self, level: CellLevel, name: impl Into<String>) -> Self {
        let name = name.into();
        match level {
            CellLevel::Cell0D => self.cell0d_file = name,
            CellLevel::Cell1D => self.cell1d_file = name,
            CellLevel::Cell2D => self.cell2d_file = name,
        }
        self
    }

    /// File name of the table for `level`.
    #[must_use]
    pub fn file_name(&self, level: CellLevel) -> &str {
        match level {
            CellLevel::Cell0D => &self.cell0d_file,
            CellLevel::Cell1D => &self.cell1d_file,
            CellLevel::Cell2D => &self.cell2d_file,
        }
    }

    /// Path of the table for `level` inside mesh directory `dir`.
    #[must_use]
    pub fn path_for<P: AsRef<Path>>(&self, dir: P, level: CellLevel) -> PathBuf {
        dir.as_ref().join(self.file_name(level))
    }
}
