//! Traits shared by the three cell levels.

use crate::CellLevel;

/// A mesh cell that can be stored in a [`CellTable`](crate::CellTable).
///
/// Every cell carries a stored id that other cells use to refer to it. The
/// id is independent of the cell's position in its table.
pub trait Cell {
    /// Topological dimension of this cell type.
    const LEVEL: CellLevel;

    /// The stored id of this cell.
    fn id(&self) -> u32;
}
