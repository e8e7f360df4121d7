//! Line-based reader for delimited cell tables.
//!
//! A cell table is a text file with a header followed by one row per cell.
//! Fields are numbers separated by a delimiter character. By default any
//! character that is neither alphanumeric nor a sign or decimal point is
//! accepted as a delimiter, so `0;1;2.5;3`, `0,1,2.5,3` and `0 1 2.5 3` all
//! read the same. Letters stay inside their field and fail to parse.

use std::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::debug;

use crate::error::{IoError, IoResult};
use crate::params::ImportParams;

/// Reader over the data rows of one cell table.
///
/// Opening the reader skips the configured number of header lines. Iterating
/// yields one [`Row`] per non-blank line, or the first error encountered.
///
/// # Example
///
/// ```no_run
/// use polymesh_io::{ImportParams, TableReader};
///
/// let reader = TableReader::open("mesh/Cell0Ds.csv", &ImportParams::default()).unwrap();
/// for row in reader {
///     let row = row.unwrap();
///     println!("line {}: {} fields", row.line(), row.len());
/// }
/// ```
#[derive(Debug)]
pub struct TableReader {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    line_number: usize,
    delimiter: Option<char>,
}

impl TableReader {
    /// Open a table and skip its header lines.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::FileNotFound`] if the file does not exist and
    /// [`IoError::Io`] if it cannot be opened or read.
    pub fn open<P: AsRef<Path>>(path: P, params: &ImportParams) -> IoResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                IoError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                IoError::Io(e)
            }
        })?;

        let mut reader = Self {
            path: path.to_path_buf(),
            lines: BufReader::new(file).lines(),
            line_number: 0,
            delimiter: params.delimiter,
        };

        for _ in 0..params.header_lines {
            if reader.next_line()?.is_none() {
                break;
            }
        }
        debug!(
            path = %reader.path.display(),
            skipped = reader.line_number,
            "Opened cell table"
        );

        Ok(reader)
    }

    /// Path of the table being read.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a parse error located at `line` of this table.
    #[must_use]
    pub fn parse_error(&self, line: usize, message: impl Into<String>) -> IoError {
        IoError::parse(&self.path, line, message)
    }

    fn next_line(&mut self) -> IoResult<Option<String>> {
        match self.lines.next() {
            Some(line) => {
                self.line_number += 1;
                Ok(Some(line?))
            }
            None => Ok(None),
        }
    }
}

impl Iterator for TableReader {
    type Item = IoResult<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let text = match self.next_line() {
                Ok(Some(text)) => text,
                Ok(None) => return None,
                Err(e) => return Some(Err(e)),
            };
            if text.trim().is_empty() {
                continue;
            }

            let line = self.line_number;
            return Some(
                split_fields(&text, self.delimiter)
                    .map(|fields| Row { line, fields })
                    .map_err(|message| self.parse_error(line, message)),
            );
        }
    }
}

/// Whether `c` belongs to a field in tolerant mode.
fn is_field_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '.' | '+' | '-')
}

fn split_fields(text: &str, delimiter: Option<char>) -> Result<Vec<String>, String> {
    match delimiter {
        None => Ok(text
            .split(|c: char| !is_field_char(c))
            .filter(|field| !field.is_empty())
            .map(str::to_string)
            .collect()),
        Some(delimiter) => text
            .trim()
            .split(delimiter)
            .enumerate()
            .map(|(column, field)| {
                let field = field.trim();
                if field.is_empty() {
                    Err(format!("empty field in column {}", column + 1))
                } else {
                    Ok(field.to_string())
                }
            })
            .collect(),
    }
}

/// One data row of a cell table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    line: usize,
    fields: Vec<String>,
}

impl Row {
    /// 1-based line number of this row in its file.
    #[inline]
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Number of fields.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the row has no fields.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Raw field text.
    #[inline]
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// A cursor that reads the fields left to right.
    #[must_use]
    pub fn cursor(&self) -> FieldCursor<'_> {
        FieldCursor {
            fields: &self.fields,
            next: 0,
        }
    }
}

/// Bounds-checked, typed, left-to-right access to the fields of a [`Row`].
///
/// Errors are plain messages; the caller attaches the file and line.
#[derive(Debug)]
pub struct FieldCursor<'a> {
    fields: &'a [String],
    next: usize,
}

impl FieldCursor<'_> {
    /// Read the next field as `T`. `name` is used in error messages.
    ///
    /// # Errors
    ///
    /// Fails if no field is left or the field does not parse as `T`.
    pub fn next_value<T>(&mut self, name: &str) -> Result<T, String>
    where
        T: FromStr,
        T::Err: Display,
    {
        let column = self.next + 1;
        let field = self.fields.get(self.next).ok_or_else(|| {
            format!(
                "missing field `{name}` (column {column}, row has {} fields)",
                self.fields.len()
            )
        })?;
        self.next += 1;

        field
            .parse()
            .map_err(|e| format!("invalid `{name}` in column {column} ({field:?}): {e}"))
    }

    /// Read the next field as a non-negative integer id or marker.
    ///
    /// # Errors
    ///
    /// See [`next_value`](Self::next_value).
    pub fn next_u32(&mut self, name: &str) -> Result<u32, String> {
        self.next_value(name)
    }

    /// Read the next field as a count.
    ///
    /// # Errors
    ///
    /// See [`next_value`](Self::next_value).
    pub fn next_usize(&mut self, name: &str) -> Result<usize, String> {
        self.next_value(name)
    }

    /// Read the next field as a finite real number.
    ///
    /// # Errors
    ///
    /// See [`next_value`](Self::next_value). `NaN` and infinities are
    /// rejected as well.
    pub fn next_f64(&mut self, name: &str) -> Result<f64, String> {
        let column = self.next + 1;
        let value: f64 = self.next_value(name)?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(format!("invalid `{name}` in column {column}: {value} is not finite"))
        }
    }

    /// Read `count` consecutive ids.
    ///
    /// # Errors
    ///
    /// See [`next_value`](Self::next_value).
    pub fn next_ids(&mut self, count: usize, name: &str) -> Result<Vec<u32>, String> {
        if count > self.remaining() {
            return Err(format!(
                "expected {count} `{name}` values, only {} fields left",
                self.remaining()
            ));
        }
        (0..count).map(|_| self.next_u32(name)).collect()
    }

    /// Number of fields not read yet.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.fields.len() - self.next
    }

    /// Check that every field has been consumed.
    ///
    /// # Errors
    ///
    /// Fails if fields remain after the last expected one.
    pub fn finish(self) -> Result<(), String> {
        match self.remaining() {
            0 => Ok(()),
            extra => Err(format!(
                "expected {} fields, found {} ({extra} unexpected)",
                self.next,
                self.fields.len()
            )),
        }
    }
}
