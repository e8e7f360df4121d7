//! Marker maps: cell ids grouped by a non-zero tag.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Marker value meaning "untagged". Never stored in a [`MarkerMap`].
pub const UNMARKED: u32 = 0;

/// Cell ids grouped by marker.
///
/// Markers iterate in ascending order. Within one marker, cell ids keep the
/// order in which they were inserted.
///
/// # Example
///
/// ```
/// use polymesh_types::MarkerMap;
///
/// let mut markers = MarkerMap::new();
/// markers.insert(0, 10); // unmarked, ignored
/// markers.insert(5, 1);
/// markers.insert(5, 3);
///
/// assert_eq!(markers.cells(5), &[1, 3]);
/// assert!(markers.cells(0).is_empty());
/// assert_eq!(markers.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MarkerMap {
    entries: BTreeMap<u32, Vec<u32>>,
}

impl MarkerMap {
    /// Create an empty marker map.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Tag `cell_id` with `marker`.
    ///
    /// Returns `false` (and stores nothing) when `marker` is [`UNMARKED`].
    pub fn insert(&mut self, marker: u32, cell_id: u32) -> bool {
        if marker == UNMARKED {
            return false;
        }
        self.entries.entry(marker).or_default().push(cell_id);
        true
    }

    /// Cell ids carrying `marker`, in insertion order.
    #[must_use]
    pub fn cells(&self, marker: u32) -> &[u32] {
        self.entries
            .get(&marker)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of distinct markers.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no cell carries a marker.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct markers in ascending order.
    pub fn markers(&self) -> impl Iterator<Item = u32> {
        self.entries.keys().copied()
    }

    /// `(marker, cell ids)` pairs in ascending marker order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[u32])> {
        self.entries.iter().map(|(&m, ids)| (m, ids.as_slice()))
    }
}
