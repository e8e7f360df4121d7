//! Append-only storage for one cell level.

use hashbrown::HashMap;
use tracing::warn;

use crate::{Cell, MarkerMap};

/// Ordered, append-only collection of cells of one level.
///
/// Cells are kept in insertion order for positional access. An id index is
/// maintained alongside so that cells can be resolved by their stored id
/// without assuming ids are contiguous or equal to positions.
///
/// # Example
///
/// ```
/// use polymesh_types::{CellTable, Vertex};
///
/// let mut table = CellTable::new();
/// table.push(Vertex::from_coords(10, 0.0, 0.0), 0);
/// table.push(Vertex::from_coords(20, 1.0, 0.0), 3);
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.position(20), Some(1));
/// assert_eq!(table.markers().cells(3), &[20]);
/// ```
#[derive(Debug, Clone)]
pub struct CellTable<C> {
    cells: Vec<C>,
    index: HashMap<u32, usize>,
    markers: MarkerMap,
}

impl<C> Default for CellTable<C> {
    fn default() -> Self {
        Self {
            cells: Vec::new(),
            index: HashMap::new(),
            markers: MarkerMap::new(),
        }
    }
}

impl<C: Cell> CellTable<C> {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cell, tagging it with `marker` unless it is zero.
    ///
    /// Returns the position of the new cell. If the id was already present,
    /// the cell is still appended but id lookups keep resolving to the
    /// earlier cell.
    pub fn push(&mut self, cell: C, marker: u32) -> usize {
        let id = cell.id();
        let position = self.cells.len();

        if let Some(&existing) = self.index.get(&id) {
            warn!(
                level = %C::LEVEL,
                id,
                existing,
                position,
                "Duplicate cell id; lookups resolve to the first occurrence"
            );
        } else {
            self.index.insert(id, position);
        }

        self.markers.insert(marker, id);
        self.cells.push(cell);
        position
    }

    /// Number of cells.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the table holds no cells.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in insertion order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[C] {
        &self.cells
    }

    /// Iterate over cells in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.cells.iter()
    }

    /// Stored ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = u32> {
        self.cells.iter().map(Cell::id)
    }

    /// Cell at `position`.
    #[inline]
    #[must_use]
    pub fn at(&self, position: usize) -> Option<&C> {
        self.cells.get(position)
    }

    /// Position of the cell with stored id `id`.
    #[inline]
    #[must_use]
    pub fn position(&self, id: u32) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Cell with stored id `id`.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&C> {
        self.position(id).and_then(|p| self.cells.get(p))
    }

    /// Whether a cell with stored id `id` exists.
    #[inline]
    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.index.contains_key(&id)
    }

    /// Markers recorded for this level.
    #[inline]
    #[must_use]
    pub const fn markers(&self) -> &MarkerMap {
        &self.markers
    }
}

impl<'a, C> IntoIterator for &'a CellTable<C> {
    type Item = &'a C;
    type IntoIter = std::slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
